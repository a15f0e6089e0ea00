//! Handlers for the `/nationalities` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::nationality::{CreateNationality, Nationality, UpdateNationality};
use squad_builder_db::models::{Deleted, NameFilter};
use squad_builder_db::repositories::NationalityRepo;

use crate::error::AppResult;
use crate::handlers::require_name;
use crate::response::Listing;
use crate::state::AppState;

/// POST /nationalities/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNationality>,
) -> AppResult<(StatusCode, Json<Nationality>)> {
    let nationality = NationalityRepo::create(&state.pool, &input).await?;
    tracing::info!(nationality_id = nationality.id, "Nationality created");
    Ok((StatusCode::CREATED, Json(nationality)))
}

/// GET /nationalities/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Nationality>>> {
    let nationalities = NationalityRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("nationalities", nationalities)))
}

/// GET /nationalities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Nationality>> {
    let nationality = NationalityRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(nationality))
}

/// GET /nationalities_filtered/?name=
///
/// Case-insensitive substring match on the name. 400 without a name.
pub async fn filtered(
    State(state): State<AppState>,
    Query(params): Query<NameFilter>,
) -> AppResult<Json<Vec<Nationality>>> {
    let name = require_name(&params)?;
    let nationalities = NationalityRepo::find_by_name(&state.pool, name).await?;
    Ok(Json(nationalities))
}

/// PUT /nationalities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNationality>,
) -> AppResult<Json<Nationality>> {
    let nationality = NationalityRepo::update(&state.pool, id, &input).await?;
    tracing::info!(nationality_id = id, "Nationality updated");
    Ok(Json(nationality))
}

/// DELETE /nationalities/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = NationalityRepo::delete(&state.pool, id).await?;
    tracing::info!(nationality_id = id, "Nationality deleted");
    Ok(Json(deleted))
}

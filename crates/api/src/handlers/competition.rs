//! Handlers for the `/competitions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::competition::{Competition, CreateCompetition, UpdateCompetition};
use squad_builder_db::models::{Deleted, NameFilter};
use squad_builder_db::repositories::CompetitionRepo;

use crate::error::AppResult;
use crate::handlers::require_name;
use crate::response::Listing;
use crate::state::AppState;

/// POST /competitions/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompetition>,
) -> AppResult<(StatusCode, Json<Competition>)> {
    let competition = CompetitionRepo::create(&state.pool, &input).await?;
    tracing::info!(competition_id = competition.id, "Competition created");
    Ok((StatusCode::CREATED, Json(competition)))
}

/// GET /competitions/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Competition>>> {
    let competitions = CompetitionRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("competitions", competitions)))
}

/// GET /competitions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Competition>> {
    let competition = CompetitionRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(competition))
}

/// GET /competitions_filtered/?name=
///
/// Case-insensitive substring match on the name. 400 without a name.
pub async fn filtered(
    State(state): State<AppState>,
    Query(params): Query<NameFilter>,
) -> AppResult<Json<Vec<Competition>>> {
    let name = require_name(&params)?;
    let competitions = CompetitionRepo::find_by_name(&state.pool, name).await?;
    Ok(Json(competitions))
}

/// PUT /competitions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompetition>,
) -> AppResult<Json<Competition>> {
    let competition = CompetitionRepo::update(&state.pool, id, &input).await?;
    tracing::info!(competition_id = id, "Competition updated");
    Ok(Json(competition))
}

/// DELETE /competitions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = CompetitionRepo::delete(&state.pool, id).await?;
    tracing::info!(competition_id = id, "Competition deleted");
    Ok(Json(deleted))
}

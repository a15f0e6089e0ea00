//! Handlers for the `/formations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::formation::{CreateFormation, Formation, UpdateFormation};
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::FormationRepo;

use crate::error::AppResult;
use crate::response::Listing;
use crate::state::AppState;

/// POST /formations/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFormation>,
) -> AppResult<(StatusCode, Json<Formation>)> {
    let formation = FormationRepo::create(&state.pool, &input).await?;
    tracing::info!(formation_id = formation.id, "Formation created");
    Ok((StatusCode::CREATED, Json(formation)))
}

/// GET /formations/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Formation>>> {
    let formations = FormationRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("formations", formations)))
}

/// GET /formations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Formation>> {
    let formation = FormationRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(formation))
}

/// PUT /formations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFormation>,
) -> AppResult<Json<Formation>> {
    let formation = FormationRepo::update(&state.pool, id, &input).await?;
    tracing::info!(formation_id = id, "Formation updated");
    Ok(Json(formation))
}

/// DELETE /formations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = FormationRepo::delete(&state.pool, id).await?;
    tracing::info!(formation_id = id, "Formation deleted");
    Ok(Json(deleted))
}

//! Handlers for the `/teams` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::team::{CreateTeam, Team, UpdateTeam};
use squad_builder_db::models::{Deleted, NameFilter};
use squad_builder_db::repositories::TeamRepo;

use crate::error::AppResult;
use crate::handlers::require_name;
use crate::response::Listing;
use crate::state::AppState;

/// POST /teams/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    let team = TeamRepo::create(&state.pool, &input).await?;
    tracing::info!(team_id = team.id, "Team created");
    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /teams/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Team>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("teams", teams)))
}

/// GET /teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Team>> {
    let team = TeamRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(team))
}

/// GET /teams_filtered/?name=
///
/// Case-insensitive substring match on the name. 400 without a name.
pub async fn filtered(
    State(state): State<AppState>,
    Query(params): Query<NameFilter>,
) -> AppResult<Json<Vec<Team>>> {
    let name = require_name(&params)?;
    let teams = TeamRepo::find_by_name(&state.pool, name).await?;
    Ok(Json(teams))
}

/// PUT /teams/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<Json<Team>> {
    let team = TeamRepo::update(&state.pool, id, &input).await?;
    tracing::info!(team_id = id, "Team updated");
    Ok(Json(team))
}

/// DELETE /teams/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;
    tracing::info!(team_id = id, "Team deleted");
    Ok(Json(deleted))
}

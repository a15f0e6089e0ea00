//! Handlers for the `/squad_players` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::squad_player::{CreateSquadPlayer, SquadPlayer, UpdateSquadPlayer};
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::SquadPlayerRepo;

use crate::error::AppResult;
use crate::response::Listing;
use crate::state::AppState;

/// POST /squad_players/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSquadPlayer>,
) -> AppResult<(StatusCode, Json<SquadPlayer>)> {
    let member = SquadPlayerRepo::create(&state.pool, &input).await?;
    tracing::info!(
        squad_player_id = member.id,
        squad_id = member.squad_id,
        player_id = member.player_id,
        "Player added to squad",
    );
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /squad_players/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<SquadPlayer>>> {
    let members = SquadPlayerRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("squad_players", members)))
}

/// GET /squad_players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SquadPlayer>> {
    let member = SquadPlayerRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(member))
}

/// PUT /squad_players/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSquadPlayer>,
) -> AppResult<Json<SquadPlayer>> {
    let member = SquadPlayerRepo::update(&state.pool, id, &input).await?;
    tracing::info!(squad_player_id = id, "Squad player updated");
    Ok(Json(member))
}

/// DELETE /squad_players/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = SquadPlayerRepo::delete(&state.pool, id).await?;
    tracing::info!(squad_player_id = id, "Squad player deleted");
    Ok(Json(deleted))
}

//! Handlers for the `/players` resource and the filtered player listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::player::{CreatePlayer, Player, PlayerFilter, UpdatePlayer};
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::PlayerRepo;

use crate::error::AppResult;
use crate::response::Listing;
use crate::state::AppState;

/// POST /players/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<(StatusCode, Json<Player>)> {
    let player = PlayerRepo::create(&state.pool, &input).await?;
    tracing::info!(player_id = player.id, position = %input.position, "Player created");
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /players/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Player>>> {
    let players = PlayerRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("players", players)))
}

/// GET /players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(player))
}

/// GET /players_filtered/
///
/// Every supplied option narrows the result. Unlike the other filtered
/// lookups, no options at all returns the full player list.
pub async fn filtered(
    State(state): State<AppState>,
    Query(params): Query<PlayerFilter>,
) -> AppResult<Json<Vec<Player>>> {
    params.validate()?;
    let players = PlayerRepo::filter(&state.pool, &params).await?;
    Ok(Json(players))
}

/// PUT /players/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlayer>,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::update(&state.pool, id, &input).await?;
    tracing::info!(player_id = id, "Player updated");
    Ok(Json(player))
}

/// DELETE /players/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = PlayerRepo::delete(&state.pool, id).await?;
    tracing::info!(player_id = id, "Player deleted");
    Ok(Json(deleted))
}

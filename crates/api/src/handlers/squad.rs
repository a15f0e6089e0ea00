//! Handlers for the `/squads` resource and the filtered squad listing.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::squad::{CreateSquad, Squad, SquadFilter, UpdateSquad};
use squad_builder_db::models::squad_player::SquadPlayer;
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::{SquadPlayerRepo, SquadRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::MISSING_FILTER;
use crate::response::Listing;
use crate::state::AppState;

/// POST /squads/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSquad>,
) -> AppResult<(StatusCode, Json<Squad>)> {
    let squad = SquadRepo::create(&state.pool, &input).await?;
    tracing::info!(squad_id = squad.id, user_id = squad.user_id, "Squad created");
    Ok((StatusCode::CREATED, Json(squad)))
}

/// GET /squads/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Squad>>> {
    let squads = SquadRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("squads", squads)))
}

/// GET /squads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Squad>> {
    let squad = SquadRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(squad))
}

/// GET /squads_filtered/?user_id=&name=&formation_id=&competition_id=&nationality_id=&budget=
///
/// Unknown parameter names and unparseable values are rejected with 400, as
/// is a request with no usable parameter.
pub async fn filtered(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> AppResult<Json<Vec<Squad>>> {
    let filter = SquadFilter::from_params(&params)?;
    if filter.is_empty() {
        return Err(AppError::BadRequest(MISSING_FILTER.to_string()));
    }
    let squads = SquadRepo::filter(&state.pool, &filter).await?;
    Ok(Json(squads))
}

/// GET /players_in_squad/{squad_id}
pub async fn players_in_squad(
    State(state): State<AppState>,
    Path(squad_id): Path<DbId>,
) -> AppResult<Json<Vec<SquadPlayer>>> {
    let members = SquadPlayerRepo::find_by_squad(&state.pool, squad_id).await?;
    Ok(Json(members))
}

/// PUT /squads/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSquad>,
) -> AppResult<Json<Squad>> {
    let squad = SquadRepo::update(&state.pool, id, &input).await?;
    tracing::info!(squad_id = id, "Squad updated");
    Ok(Json(squad))
}

/// DELETE /squads/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = SquadRepo::delete(&state.pool, id).await?;
    tracing::info!(squad_id = id, "Squad deleted");
    Ok(Json(deleted))
}

//! Handlers for team participation in competitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::types::DbId;
use squad_builder_db::models::team_competition::{CreateTeamCompetition, TeamCompetition};
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::TeamCompetitionRepo;

use crate::error::AppResult;
use crate::response::Listing;
use crate::state::AppState;

/// POST /teams_competitions/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTeamCompetition>,
) -> AppResult<(StatusCode, Json<TeamCompetition>)> {
    let pair = TeamCompetitionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        team_id = pair.team_id,
        competition_id = pair.competition_id,
        "Team entered competition",
    );
    Ok((StatusCode::CREATED, Json(pair)))
}

/// GET /teams_competitions/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<TeamCompetition>>> {
    let pairs = TeamCompetitionRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("team_competitions", pairs)))
}

/// GET /teams_competitions/{team_id}/{competition_id}
pub async fn get_pair(
    State(state): State<AppState>,
    Path((team_id, competition_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<TeamCompetition>> {
    let pair = TeamCompetitionRepo::find_by_pair(&state.pool, team_id, competition_id).await?;
    Ok(Json(pair))
}

/// DELETE /teams_competitions/{team_id}/{competition_id}
pub async fn delete_pair(
    State(state): State<AppState>,
    Path((team_id, competition_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Deleted>> {
    let deleted = TeamCompetitionRepo::delete_pair(&state.pool, team_id, competition_id).await?;
    tracing::info!(team_id, competition_id, "Team withdrawn from competition");
    Ok(Json(deleted))
}

/// GET /team_competitions/{team_id}
///
/// Competitions the team takes part in.
pub async fn by_team(
    State(state): State<AppState>,
    Path(team_id): Path<DbId>,
) -> AppResult<Json<Vec<TeamCompetition>>> {
    let pairs = TeamCompetitionRepo::find_by_team(&state.pool, team_id).await?;
    Ok(Json(pairs))
}

/// GET /competition_participants/{competition_id}
///
/// Teams taking part in the competition.
pub async fn by_competition(
    State(state): State<AppState>,
    Path(competition_id): Path<DbId>,
) -> AppResult<Json<Vec<TeamCompetition>>> {
    let pairs = TeamCompetitionRepo::find_by_competition(&state.pool, competition_id).await?;
    Ok(Json(pairs))
}

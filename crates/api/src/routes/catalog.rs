//! Route definitions for competitions, nationalities, teams, formations and
//! team participation in competitions.

use axum::routing::get;
use axum::Router;

use crate::handlers::{competition, formation, nationality, team, team_competition};
use crate::state::AppState;

/// Catalog routes.
///
/// ```text
/// GET    /competitions/                                   -> list
/// POST   /competitions/                                   -> create
/// GET    /competitions/{id}                               -> get_by_id
/// PUT    /competitions/{id}                               -> update
/// DELETE /competitions/{id}                               -> delete
/// GET    /competitions_filtered/?name=                    -> filtered
///
/// (same shape for /nationalities and /teams; /formations has no filter)
///
/// GET    /teams_competitions/                             -> list
/// POST   /teams_competitions/                             -> create
/// GET    /teams_competitions/{team_id}/{competition_id}   -> get_pair
/// DELETE /teams_competitions/{team_id}/{competition_id}   -> delete_pair
/// GET    /team_competitions/{team_id}                     -> by_team
/// GET    /competition_participants/{competition_id}       -> by_competition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Competitions.
        .route(
            "/competitions/",
            get(competition::list).post(competition::create),
        )
        .route(
            "/competitions/{id}",
            get(competition::get_by_id)
                .put(competition::update)
                .delete(competition::delete),
        )
        .route("/competitions_filtered/", get(competition::filtered))
        // Nationalities.
        .route(
            "/nationalities/",
            get(nationality::list).post(nationality::create),
        )
        .route(
            "/nationalities/{id}",
            get(nationality::get_by_id)
                .put(nationality::update)
                .delete(nationality::delete),
        )
        .route("/nationalities_filtered/", get(nationality::filtered))
        // Teams.
        .route("/teams/", get(team::list).post(team::create))
        .route(
            "/teams/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
        .route("/teams_filtered/", get(team::filtered))
        // Formations.
        .route("/formations/", get(formation::list).post(formation::create))
        .route(
            "/formations/{id}",
            get(formation::get_by_id)
                .put(formation::update)
                .delete(formation::delete),
        )
        // Team participation.
        .route(
            "/teams_competitions/",
            get(team_competition::list).post(team_competition::create),
        )
        .route(
            "/teams_competitions/{team_id}/{competition_id}",
            get(team_competition::get_pair).delete(team_competition::delete_pair),
        )
        .route(
            "/team_competitions/{team_id}",
            get(team_competition::by_team),
        )
        .route(
            "/competition_participants/{competition_id}",
            get(team_competition::by_competition),
        )
}

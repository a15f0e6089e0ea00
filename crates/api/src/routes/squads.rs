//! Route definitions for squads, squad membership and ratings.

use axum::routing::get;
use axum::Router;

use crate::handlers::{rating, squad, squad_player};
use crate::state::AppState;

/// ```text
/// GET    /squads/                        -> list
/// POST   /squads/                        -> create
/// GET    /squads/{id}                    -> get_by_id
/// PUT    /squads/{id}                    -> update
/// DELETE /squads/{id}                    -> delete
/// GET    /squads_filtered/               -> filtered
/// GET    /players_in_squad/{squad_id}    -> players_in_squad
///
/// (CRUD of the same shape for /squad_players and /ratings)
/// GET    /ratings_filtered/?squad_id=    -> filtered
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Squads.
        .route("/squads/", get(squad::list).post(squad::create))
        .route(
            "/squads/{id}",
            get(squad::get_by_id)
                .put(squad::update)
                .delete(squad::delete),
        )
        .route("/squads_filtered/", get(squad::filtered))
        .route("/players_in_squad/{squad_id}", get(squad::players_in_squad))
        // Squad membership.
        .route(
            "/squad_players/",
            get(squad_player::list).post(squad_player::create),
        )
        .route(
            "/squad_players/{id}",
            get(squad_player::get_by_id)
                .put(squad_player::update)
                .delete(squad_player::delete),
        )
        // Ratings.
        .route("/ratings/", get(rating::list).post(rating::create))
        .route(
            "/ratings/{id}",
            get(rating::get_by_id)
                .put(rating::update)
                .delete(rating::delete),
        )
        .route("/ratings_filtered/", get(rating::filtered))
}

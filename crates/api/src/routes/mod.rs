pub mod catalog;
pub mod health;
pub mod players;
pub mod squads;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Paths keep their trailing slash on collection routes; clients depend on
/// the exact form.
///
/// ```text
/// /competitions/ /nationalities/ /teams/ /formations/   catalog entities
/// /players/                                             players
/// /squads/ /squad_players/ /ratings/                    squads and ratings
/// /users/ /users/verify/                                users and credentials
///
/// /{entity}_filtered/?...                               filtered lookups
/// /players_in_squad/{squad_id}                          squad membership
/// /teams_competitions/...                               team participation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(players::router())
        .merge(squads::router())
        .merge(users::router())
}

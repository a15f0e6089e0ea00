//! Route definitions for the `/players` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::player;
use crate::state::AppState;

/// ```text
/// GET    /players/              -> list
/// POST   /players/              -> create
/// GET    /players/{id}          -> get_by_id
/// PUT    /players/{id}          -> update
/// DELETE /players/{id}          -> delete
/// GET    /players_filtered/     -> filtered
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/players/", get(player::list).post(player::create))
        .route(
            "/players/{id}",
            get(player::get_by_id)
                .put(player::update)
                .delete(player::delete),
        )
        .route("/players_filtered/", get(player::filtered))
}

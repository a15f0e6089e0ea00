//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET    /users/          -> list
/// POST   /users/          -> create
/// GET    /users/{id}      -> get_by_id
/// PUT    /users/{id}      -> update
/// DELETE /users/{id}      -> delete
/// POST   /users/verify/   -> verify
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/", get(user::list).post(user::create))
        .route("/users/verify/", post(user::verify))
        .route(
            "/users/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}

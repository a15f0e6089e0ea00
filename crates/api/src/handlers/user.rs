//! Handlers for the `/users` resource and credential checks.
//!
//! Responses use [`UserResponse`], so the password hash never leaves the
//! server.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use squad_builder_core::error::CoreError;
use squad_builder_core::types::DbId;
use squad_builder_db::models::user::UserResponse;
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::UserRepo;

use crate::auth::credentials::{self, Verification};
use crate::error::AppResult;
use crate::response::Listing;
use crate::state::AppState;

/// Request body for creating or replacing a user.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /users/verify/`.
#[derive(Debug, Deserialize)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

/// POST /users/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = credentials::create_user(
        &state.pool,
        &state.config.password,
        &input.username,
        &input.email,
        &input.password,
    )
    .await?;
    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(Listing::new("users", users)))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(user.into()))
}

/// PUT /users/{id}
///
/// Full replacement; the supplied password is always rehashed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = credentials::update_user(
        &state.pool,
        &state.config.password,
        id,
        &input.username,
        &input.email,
        &input.password,
    )
    .await?;
    tracing::info!(user_id = id, "User updated");
    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = id, "User deleted");
    Ok(Json(deleted))
}

/// POST /users/verify/
///
/// Returns the user's id when the password matches, 401 when it does not,
/// and 404 for an unknown username.
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<UserCredentials>,
) -> AppResult<Json<DbId>> {
    match credentials::verify(&state.pool, &input.username, &input.password).await? {
        Verification::Verified(user_id) => {
            tracing::info!(user_id, "Credentials verified");
            Ok(Json(user_id))
        }
        Verification::Mismatch => {
            tracing::info!(username = %input.username, "Credential mismatch");
            Err(CoreError::Unauthorized("Invalid credentials".to_string()).into())
        }
    }
}

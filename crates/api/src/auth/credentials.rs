//! User creation, update and login checks.
//!
//! Plaintext passwords only pass through this module on their way to
//! [`hash_password`] or [`verify_password`]; the store sees hashes only.

use sqlx::PgPool;
use squad_builder_core::error::CoreError;
use squad_builder_core::types::DbId;
use squad_builder_db::models::user::{CreateUser, User};
use squad_builder_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password, PasswordConfig};
use crate::error::{AppError, AppResult};

/// Outcome of checking a username/password pair against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The password matched; carries the user's id.
    Verified(DbId),
    /// The user exists but the password did not match.
    Mismatch,
}

/// Argon2 runs on the blocking pool, never on an async worker.
async fn hash(config: &PasswordConfig, password: &str) -> AppResult<String> {
    let config = config.clone();
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&config, &password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")).into())
}

/// Hash `password` with a fresh salt and insert the user.
pub async fn create_user(
    pool: &PgPool,
    config: &PasswordConfig,
    username: &str,
    email: &str,
    password: &str,
) -> AppResult<User> {
    let input = CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: hash(config, password).await?,
    };
    Ok(UserRepo::create(pool, &input).await?)
}

/// Replace a user's fields. The password is always rehashed, even if unchanged.
pub async fn update_user(
    pool: &PgPool,
    config: &PasswordConfig,
    id: DbId,
    username: &str,
    email: &str,
    password: &str,
) -> AppResult<User> {
    let input = CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: hash(config, password).await?,
    };
    Ok(UserRepo::update(pool, id, &input).await?)
}

/// Check a username/password pair.
///
/// An unknown username fails with NotFound; a wrong password is a
/// [`Verification::Mismatch`], not an error.
pub async fn verify(pool: &PgPool, username: &str, password: &str) -> AppResult<Verification> {
    let user = UserRepo::find_by_username(pool, username).await?;

    let password = password.to_string();
    let stored_hash = user.password_hash;
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {e}")))?
        .map_err(|e| {
            CoreError::Internal(format!("Stored hash for user {} is unusable: {e}", user.id))
        })?;

    Ok(if matches {
        Verification::Verified(user.id)
    } else {
        Verification::Mismatch
    })
}

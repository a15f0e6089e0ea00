//! Repository for the `users` table.
//!
//! Callers hash passwords before they reach this layer; the repository only
//! ever sees `password_hash`.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "users";
const ENTITY: &str = "User";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row (hash included).
    ///
    /// Duplicate usernames or emails violate `uq_users_username` /
    /// `uq_users_email`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> StoreResult<User> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO users (username, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<User> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(pool: &PgPool, username: &str) -> StoreResult<User> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: format!("username '{username}'"),
            })
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        Ok(sqlx::query_as::<_, User>(&query).fetch_all(pool).await?)
    }

    /// Replace username, email and password hash.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> StoreResult<User> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE users SET username = $2, email = $3, password_hash = $4 \
                 WHERE id = $1 \
                 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, User>(&query)
                    .bind(id)
                    .bind(&input.username)
                    .bind(&input.email)
                    .bind(&input.password_hash)
                    .fetch_one(&mut *tx)
                    .await?,
            )
        }
        .await;
        tx::finish(tx, result).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<Deleted> {
        tx::delete_by_id(pool, TABLE, ENTITY, id).await
    }
}

//! Repository for the `ratings` table.
//!
//! The `ck_ratings_rating_range` constraint rejects values outside `0..=5`;
//! such inserts and updates surface as [`StoreError::Persistence`].

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::rating::{CreateRating, Rating, UpdateRating};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "ratings";
const ENTITY: &str = "Rating";

const COLUMNS: &str = "id, user_id, squad_id, rating, comment, created_at";

/// Provides CRUD operations for squad ratings.
pub struct RatingRepo;

impl RatingRepo {
    pub async fn create(pool: &PgPool, input: &CreateRating) -> StoreResult<Rating> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO ratings (user_id, squad_id, rating, comment) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Rating>(&query)
            .bind(input.user_id)
            .bind(input.squad_id)
            .bind(input.rating)
            .bind(input.comment.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Rating> {
        let query = format!("SELECT {COLUMNS} FROM ratings WHERE id = $1");
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// All ratings given to a squad.
    pub async fn find_by_squad(pool: &PgPool, squad_id: DbId) -> StoreResult<Vec<Rating>> {
        let query = format!("SELECT {COLUMNS} FROM ratings WHERE squad_id = $1 ORDER BY id");
        Ok(sqlx::query_as::<_, Rating>(&query)
            .bind(squad_id)
            .fetch_all(pool)
            .await?)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Rating>> {
        let query = format!("SELECT {COLUMNS} FROM ratings ORDER BY id");
        Ok(sqlx::query_as::<_, Rating>(&query).fetch_all(pool).await?)
    }

    /// Replace every settable field. `created_at` is preserved.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateRating) -> StoreResult<Rating> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE ratings SET user_id = $2, squad_id = $3, rating = $4, comment = $5 \
                 WHERE id = $1 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Rating>(&query)
                    .bind(id)
                    .bind(input.user_id)
                    .bind(input.squad_id)
                    .bind(input.rating)
                    .bind(input.comment.as_deref())
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

//! Repository for the `competitions` table.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::competition::{Competition, CreateCompetition, UpdateCompetition};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "competitions";
const ENTITY: &str = "Competition";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, region";

/// Provides CRUD operations for competitions.
pub struct CompetitionRepo;

impl CompetitionRepo {
    /// Insert a new competition, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCompetition) -> StoreResult<Competition> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO competitions (name, region) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Competition>(&query)
            .bind(&input.name)
            .bind(&input.region)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Competition> {
        let query = format!("SELECT {COLUMNS} FROM competitions WHERE id = $1");
        sqlx::query_as::<_, Competition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Case-insensitive substring search on the competition name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> StoreResult<Vec<Competition>> {
        let query =
            format!("SELECT {COLUMNS} FROM competitions WHERE name ILIKE $1 ORDER BY id");
        Ok(sqlx::query_as::<_, Competition>(&query)
            .bind(format!("%{name}%"))
            .fetch_all(pool)
            .await?)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Competition>> {
        let query = format!("SELECT {COLUMNS} FROM competitions ORDER BY id");
        Ok(sqlx::query_as::<_, Competition>(&query).fetch_all(pool).await?)
    }

    /// Replace every settable field of an existing competition.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompetition,
    ) -> StoreResult<Competition> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE competitions SET name = $2, region = $3 WHERE id = $1 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Competition>(&query)
                    .bind(id)
                    .bind(&input.name)
                    .bind(&input.region)
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

//! Repository for the `nationalities` table.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::nationality::{CreateNationality, Nationality, UpdateNationality};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "nationalities";
const ENTITY: &str = "Nationality";

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for nationalities.
pub struct NationalityRepo;

impl NationalityRepo {
    /// Insert a new nationality. Duplicate names violate `uq_nationalities_name`.
    pub async fn create(pool: &PgPool, input: &CreateNationality) -> StoreResult<Nationality> {
        let mut tx = pool.begin().await?;
        let query = format!("INSERT INTO nationalities (name) VALUES ($1) RETURNING {COLUMNS}");
        let result = sqlx::query_as::<_, Nationality>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Nationality> {
        let query = format!("SELECT {COLUMNS} FROM nationalities WHERE id = $1");
        sqlx::query_as::<_, Nationality>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Case-insensitive substring search on the nationality name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> StoreResult<Vec<Nationality>> {
        let query =
            format!("SELECT {COLUMNS} FROM nationalities WHERE name ILIKE $1 ORDER BY id");
        Ok(sqlx::query_as::<_, Nationality>(&query)
            .bind(format!("%{name}%"))
            .fetch_all(pool)
            .await?)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Nationality>> {
        let query = format!("SELECT {COLUMNS} FROM nationalities ORDER BY id");
        Ok(sqlx::query_as::<_, Nationality>(&query).fetch_all(pool).await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNationality,
    ) -> StoreResult<Nationality> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query =
                format!("UPDATE nationalities SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Nationality>(&query)
                    .bind(id)
                    .bind(&input.name)
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

//! Repository for the `formations` table.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::formation::{CreateFormation, Formation, UpdateFormation};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "formations";
const ENTITY: &str = "Formation";

const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for formations.
pub struct FormationRepo;

impl FormationRepo {
    pub async fn create(pool: &PgPool, input: &CreateFormation) -> StoreResult<Formation> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO formations (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Formation>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Formation> {
        let query = format!("SELECT {COLUMNS} FROM formations WHERE id = $1");
        sqlx::query_as::<_, Formation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Formation>> {
        let query = format!("SELECT {COLUMNS} FROM formations ORDER BY id");
        Ok(sqlx::query_as::<_, Formation>(&query).fetch_all(pool).await?)
    }

    /// Replace name and description. A `None` description clears the column.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFormation,
    ) -> StoreResult<Formation> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE formations SET name = $2, description = $3 \
                 WHERE id = $1 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Formation>(&query)
                    .bind(id)
                    .bind(&input.name)
                    .bind(input.description.as_deref())
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

//! Repository for the `teams` table.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::team::{CreateTeam, Team, UpdateTeam};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "teams";
const ENTITY: &str = "Team";

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team. Team names need not be unique.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> StoreResult<Team> {
        let mut tx = pool.begin().await?;
        let query = format!("INSERT INTO teams (name) VALUES ($1) RETURNING {COLUMNS}");
        let result = sqlx::query_as::<_, Team>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Team> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Case-insensitive substring search on the team name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> StoreResult<Vec<Team>> {
        let query =
            format!("SELECT {COLUMNS} FROM teams WHERE name ILIKE $1 ORDER BY id");
        Ok(sqlx::query_as::<_, Team>(&query)
            .bind(format!("%{name}%"))
            .fetch_all(pool)
            .await?)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Team>> {
        let query = format!("SELECT {COLUMNS} FROM teams ORDER BY id");
        Ok(sqlx::query_as::<_, Team>(&query).fetch_all(pool).await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeam,
    ) -> StoreResult<Team> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query =
                format!("UPDATE teams SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Team>(&query)
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

//! Repository for the `squads` table, including the filtered listing.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::filter;
use crate::models::squad::{CreateSquad, Squad, SquadFilter, UpdateSquad};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "squads";
const ENTITY: &str = "Squad";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, formation_id, name, competition_id, budget, \
                       nationality_id, created_at";

/// Provides CRUD and filter operations for squads.
pub struct SquadRepo;

impl SquadRepo {
    pub async fn create(pool: &PgPool, input: &CreateSquad) -> StoreResult<Squad> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO squads \
                (user_id, formation_id, name, competition_id, budget, nationality_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Squad>(&query)
            .bind(input.user_id)
            .bind(input.formation_id)
            .bind(&input.name)
            .bind(input.competition_id)
            .bind(input.budget)
            .bind(input.nationality_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Squad> {
        let query = format!("SELECT {COLUMNS} FROM squads WHERE id = $1");
        sqlx::query_as::<_, Squad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Case-insensitive substring search on the squad name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> StoreResult<Vec<Squad>> {
        let query = format!("SELECT {COLUMNS} FROM squads WHERE name ILIKE $1 ORDER BY id");
        Ok(sqlx::query_as::<_, Squad>(&query)
            .bind(format!("%{name}%"))
            .fetch_all(pool)
            .await?)
    }

    /// All squads owned by a user.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> StoreResult<Vec<Squad>> {
        let query = format!("SELECT {COLUMNS} FROM squads WHERE user_id = $1 ORDER BY id");
        Ok(sqlx::query_as::<_, Squad>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Squad>> {
        let query = format!("SELECT {COLUMNS} FROM squads ORDER BY id");
        Ok(sqlx::query_as::<_, Squad>(&query).fetch_all(pool).await?)
    }

    /// List squads matching every predicate of `params`.
    pub async fn filter(pool: &PgPool, params: &SquadFilter) -> StoreResult<Vec<Squad>> {
        let composed = filter::squad_predicates(params);
        let query = format!(
            "SELECT {COLUMNS} FROM squads {where_clause} ORDER BY id",
            where_clause = composed.where_clause(),
        );
        tracing::debug!(%query, binds = composed.binds.len(), "Filtering squads");

        let q = filter::bind_all(sqlx::query_as::<_, Squad>(&query), &composed.binds);
        Ok(q.fetch_all(pool).await?)
    }

    /// Replace every settable field of an existing squad.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateSquad) -> StoreResult<Squad> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE squads SET \
                    user_id = $2, \
                    formation_id = $3, \
                    name = $4, \
                    competition_id = $5, \
                    budget = $6, \
                    nationality_id = $7 \
                 WHERE id = $1 \
                 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Squad>(&query)
                    .bind(id)
                    .bind(input.user_id)
                    .bind(input.formation_id)
                    .bind(&input.name)
                    .bind(input.competition_id)
                    .bind(input.budget)
                    .bind(input.nationality_id)
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

//! Repository for the `players` table, including the filtered listing.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::filter;
use crate::models::player::{CreatePlayer, Player, PlayerFilter, UpdatePlayer};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "players";
const ENTITY: &str = "Player";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, nationality_id, team_id, market_value, position, alternate_position";

/// Column list qualified with the `p` alias, for queries that join.
const P_COLUMNS: &str = "p.id, p.name, p.nationality_id, p.team_id, p.market_value, \
                         p.position, p.alternate_position";

/// Provides CRUD and filter operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> StoreResult<Player> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO players \
                (name, nationality_id, team_id, market_value, position, alternate_position) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Player>(&query)
            .bind(&input.name)
            .bind(input.nationality_id)
            .bind(input.team_id)
            .bind(input.market_value)
            .bind(input.position.as_str())
            .bind(input.alternate_position.map(|p| p.as_str()))
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Player> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Player>> {
        let query = format!("SELECT {COLUMNS} FROM players ORDER BY id");
        Ok(sqlx::query_as::<_, Player>(&query).fetch_all(pool).await?)
    }

    /// List players matching every supplied option of `params`.
    ///
    /// An empty filter returns every player.
    pub async fn filter(pool: &PgPool, params: &PlayerFilter) -> StoreResult<Vec<Player>> {
        let composed = filter::player_predicates(params);
        let query = format!(
            "SELECT {P_COLUMNS} FROM players p {joins} {where_clause} ORDER BY p.id",
            joins = composed.join_clause(),
            where_clause = composed.where_clause(),
        );
        tracing::debug!(%query, binds = composed.binds.len(), "Filtering players");

        let q = filter::bind_all(sqlx::query_as::<_, Player>(&query), &composed.binds);
        Ok(q.fetch_all(pool).await?)
    }

    /// Replace every settable field of an existing player.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePlayer) -> StoreResult<Player> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE players SET \
                    name = $2, \
                    nationality_id = $3, \
                    team_id = $4, \
                    market_value = $5, \
                    position = $6, \
                    alternate_position = $7 \
                 WHERE id = $1 \
                 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, Player>(&query)
                    .bind(id)
                    .bind(&input.name)
                    .bind(input.nationality_id)
                    .bind(input.team_id)
                    .bind(input.market_value)
                    .bind(input.position.as_str())
                    .bind(input.alternate_position.map(|p| p.as_str()))
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

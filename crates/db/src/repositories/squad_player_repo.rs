//! Repository for the `squad_players` table.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::squad_player::{CreateSquadPlayer, SquadPlayer, UpdateSquadPlayer};
use crate::models::Deleted;
use crate::tx;

const TABLE: &str = "squad_players";
const ENTITY: &str = "SquadPlayer";

const COLUMNS: &str = "id, squad_id, player_id, position";

/// Provides CRUD operations for squad membership rows.
pub struct SquadPlayerRepo;

impl SquadPlayerRepo {
    pub async fn create(pool: &PgPool, input: &CreateSquadPlayer) -> StoreResult<SquadPlayer> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO squad_players (squad_id, player_id, position) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, SquadPlayer>(&query)
            .bind(input.squad_id)
            .bind(input.player_id)
            .bind(&input.position)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<SquadPlayer> {
        let query = format!("SELECT {COLUMNS} FROM squad_players WHERE id = $1");
        sqlx::query_as::<_, SquadPlayer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// All membership rows of a squad. An unknown squad yields an empty list.
    pub async fn find_by_squad(pool: &PgPool, squad_id: DbId) -> StoreResult<Vec<SquadPlayer>> {
        let query =
            format!("SELECT {COLUMNS} FROM squad_players WHERE squad_id = $1 ORDER BY id");
        Ok(sqlx::query_as::<_, SquadPlayer>(&query)
            .bind(squad_id)
            .fetch_all(pool)
            .await?)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<SquadPlayer>> {
        let query = format!("SELECT {COLUMNS} FROM squad_players ORDER BY id");
        Ok(sqlx::query_as::<_, SquadPlayer>(&query).fetch_all(pool).await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSquadPlayer,
    ) -> StoreResult<SquadPlayer> {
        let mut tx = pool.begin().await?;
        let result = async {
            tx::lock_row(&mut tx, TABLE, ENTITY, id).await?;
            let query = format!(
                "UPDATE squad_players SET squad_id = $2, player_id = $3, position = $4 \
                 WHERE id = $1 RETURNING {COLUMNS}"
            );
            Ok::<_, StoreError>(
                sqlx::query_as::<_, SquadPlayer>(&query)
                    .bind(id)
                    .bind(input.squad_id)
                    .bind(input.player_id)
                    .bind(&input.position)
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

//! Repository for the `team_competitions` join table.
//!
//! Rows are keyed by `(team_id, competition_id)`; there is no surrogate id
//! and no update operation.

use sqlx::PgPool;
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::team_competition::{CreateTeamCompetition, TeamCompetition};
use crate::models::Deleted;
use crate::tx;

const ENTITY: &str = "TeamCompetition";

const COLUMNS: &str = "team_id, competition_id";

fn pair_not_found(team_id: DbId, competition_id: DbId) -> StoreError {
    StoreError::NotFound {
        entity: ENTITY,
        key: format!("team id {team_id} and competition id {competition_id}"),
    }
}

/// Provides operations on team/competition participation.
pub struct TeamCompetitionRepo;

impl TeamCompetitionRepo {
    /// Link a team to a competition. Duplicate pairs and dangling ids fail
    /// with [`StoreError::Persistence`].
    pub async fn create(
        pool: &PgPool,
        input: &CreateTeamCompetition,
    ) -> StoreResult<TeamCompetition> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO team_competitions (team_id, competition_id) \
             VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, TeamCompetition>(&query)
            .bind(input.team_id)
            .bind(input.competition_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::from);
        tx::finish(tx, result).await
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<TeamCompetition>> {
        let query =
            format!("SELECT {COLUMNS} FROM team_competitions ORDER BY team_id, competition_id");
        Ok(sqlx::query_as::<_, TeamCompetition>(&query)
            .fetch_all(pool)
            .await?)
    }

    /// Competitions a team takes part in.
    pub async fn find_by_team(pool: &PgPool, team_id: DbId) -> StoreResult<Vec<TeamCompetition>> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_competitions WHERE team_id = $1 ORDER BY competition_id"
        );
        Ok(sqlx::query_as::<_, TeamCompetition>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await?)
    }

    /// Teams taking part in a competition.
    pub async fn find_by_competition(
        pool: &PgPool,
        competition_id: DbId,
    ) -> StoreResult<Vec<TeamCompetition>> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_competitions WHERE competition_id = $1 ORDER BY team_id"
        );
        Ok(sqlx::query_as::<_, TeamCompetition>(&query)
            .bind(competition_id)
            .fetch_all(pool)
            .await?)
    }

    /// Look up one pair, failing with NotFound if it was never linked.
    pub async fn find_by_pair(
        pool: &PgPool,
        team_id: DbId,
        competition_id: DbId,
    ) -> StoreResult<TeamCompetition> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_competitions WHERE team_id = $1 AND competition_id = $2"
        );
        sqlx::query_as::<_, TeamCompetition>(&query)
            .bind(team_id)
            .bind(competition_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| pair_not_found(team_id, competition_id))
    }

    /// Unlink a team from a competition after confirming the pair exists.
    pub async fn delete_pair(
        pool: &PgPool,
        team_id: DbId,
        competition_id: DbId,
    ) -> StoreResult<Deleted> {
        let mut tx = pool.begin().await?;
        let result = async {
            let deleted = sqlx::query(
                "DELETE FROM team_competitions WHERE team_id = $1 AND competition_id = $2",
            )
            .bind(team_id)
            .bind(competition_id)
            .execute(&mut *tx)
            .await?;
            if deleted.rows_affected() == 0 {
                return Err(pair_not_found(team_id, competition_id));
            }
            Ok::<_, StoreError>(Deleted {
                detail: format!(
                    "Team-Competition with team id {team_id} and competition id \
                     {competition_id} deleted successfully"
                ),
            })
        }
        .await;
        tx::finish(tx, result).await
    }
}

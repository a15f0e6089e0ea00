//! Single-row transaction helpers shared by the repositories.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use squad_builder_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::Deleted;

/// Commit on success, roll back on failure.
///
/// The rollback is awaited before the original error is returned so the
/// connection goes back to the pool clean.
pub(crate) async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    result: StoreResult<T>,
) -> StoreResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

/// Load and lock the row with the given id, failing with NotFound if absent.
pub(crate) async fn lock_row(
    conn: &mut PgConnection,
    table: &'static str,
    entity: &'static str,
    id: DbId,
) -> StoreResult<()> {
    let query = format!("SELECT id FROM {table} WHERE id = $1 FOR UPDATE");
    let found: Option<(DbId,)> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    found
        .map(|_| ())
        .ok_or_else(|| StoreError::not_found(entity, id))
}

/// Delete a row by id after confirming it exists.
pub(crate) async fn delete_by_id(
    pool: &PgPool,
    table: &'static str,
    entity: &'static str,
    id: DbId,
) -> StoreResult<Deleted> {
    let mut tx = pool.begin().await?;
    let result = async {
        lock_row(&mut tx, table, entity, id).await?;
        let query = format!("DELETE FROM {table} WHERE id = $1");
        sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        Ok::<_, StoreError>(Deleted::new(entity, id))
    }
    .await;
    finish(tx, result).await
}

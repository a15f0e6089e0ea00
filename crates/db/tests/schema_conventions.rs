//! Schema-level checks on the migrations: id types, timestamp types, and
//! constraint naming.

use sqlx::PgPool;

/// Every surrogate `id` column is bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_ids_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// `created_at` columns are timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_at_is_timestamptz(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'created_at'
           AND table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let tables: Vec<_> = rows.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tables, vec!["ratings", "squads", "users"]);
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "timestamp with time zone",
            "Table {table}.created_at should be timestamptz"
        );
    }
}

/// Unique and check constraints carry `uq_` / `ck_` prefixes, so a violation
/// can be attributed by name.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_constraint_names_use_prefixes(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT conname::text, contype::text
         FROM pg_constraint c
         JOIN pg_namespace n ON n.oid = c.connamespace
         WHERE n.nspname = 'public'
           AND contype IN ('u', 'c')
         ORDER BY conname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<_> = rows.iter().map(|(name, _)| name.as_str()).collect();
    assert!(names.contains(&"uq_users_username"), "{names:?}");
    assert!(names.contains(&"ck_ratings_rating_range"), "{names:?}");
    for (name, kind) in &rows {
        let prefix = if kind == "u" { "uq_" } else { "ck_" };
        assert!(name.starts_with(prefix), "constraint {name} should start with {prefix}");
    }
}

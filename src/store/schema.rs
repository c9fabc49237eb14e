//! Idempotent schema setup.
//!
//! The schema is created on first use with `CREATE TABLE IF NOT EXISTS`;
//! there is no migration path (schema changes are out of scope).

use sqlx::SqlitePool;

use crate::error::StoreError;

/// Creates the `locations` and `preferences` tables if they don't exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS locations (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            latitude  REAL NOT NULL,
            longitude REAL NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS preferences (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::pool::connect_memory;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = connect_memory().await.expect("Failed to open pool");
        ensure_schema(&pool).await.expect("First setup failed");
        // Running setup again against an existing schema must be a no-op
        ensure_schema(&pool).await.expect("Second setup failed");
    }

    #[tokio::test]
    async fn test_ensure_schema_creates_tables() {
        let pool = connect_memory().await.expect("Failed to open pool");
        ensure_schema(&pool).await.expect("Setup failed");

        for table in ["locations", "preferences"] {
            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
            )
            .bind(table)
            .fetch_one(&pool)
            .await
            .expect("Failed to query sqlite_master");
            assert_eq!(count, 1, "table {} should exist", table);
        }
    }
}

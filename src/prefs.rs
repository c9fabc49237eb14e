//! Opaque string key-value persistence for simple settings.
//!
//! Preferences live in the same database as the location history and are
//! read and written one key at a time. The only typed accessor is the
//! dark-mode flag, stored under `"darkMode"` as `"0"`/`"1"`.

use std::path::Path;

use log;
use sqlx::{Row, SqlitePool};

use crate::error::StoreError;
use crate::store::{pool, schema};

/// Key under which the dark-mode flag is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value preference store.
///
/// Cheap to clone; clones share the underlying connection pool. Usually
/// obtained via [`LocationStore::preferences`](crate::LocationStore::preferences)
/// so both stores share one database handle.
#[derive(Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    /// Opens a file-backed preference store, creating the database file and
    /// schema if they don't exist.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let pool = pool::connect_file(db_path).await?;
        schema::ensure_schema(&pool).await?;
        Ok(PreferenceStore { pool })
    }

    /// Wraps an already-initialized pool. The schema must exist.
    pub(crate) fn from_pool(pool: SqlitePool) -> Self {
        PreferenceStore { pool }
    }

    /// Returns the value stored under `key`, or `None` if the key is unset.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to read preference {key}: {e}");
                StoreError::SqlError(e)
            })?;

        Ok(row.map(|r| r.get(0)))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO preferences (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to write preference {key}: {e}");
            StoreError::SqlError(e)
        })?;

        Ok(())
    }

    /// Reads the dark-mode flag. An unset key is treated as light mode.
    pub async fn dark_mode(&self) -> Result<bool, StoreError> {
        Ok(self.get(DARK_MODE_KEY).await?.as_deref() == Some("1"))
    }

    /// Writes the dark-mode flag as `"1"`/`"0"`.
    pub async fn set_dark_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.set(DARK_MODE_KEY, if enabled { "1" } else { "0" }).await
    }
}

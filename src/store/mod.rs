//! Durable append-only storage of captured coordinates.
//!
//! [`LocationStore`] owns a SQLite-backed table of location rows and exposes
//! exactly two operations: insert one coordinate, list all stored records.
//! Rows are never updated or deleted, and the store imposes no locking of its
//! own; concurrent callers get whatever SQLite's transaction model provides.

pub mod pool;
pub mod schema;

use std::path::Path;

use log;
use sqlx::{Row, SqlitePool};

use crate::error::StoreError;
use crate::models::{Coordinate, LocationRecord};
use crate::prefs::PreferenceStore;

/// Append-only store of captured coordinates, persistent across restarts.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use location_log::{Coordinate, LocationStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = LocationStore::open(std::path::Path::new("locations.db")).await?;
/// let id = store.insert(&Coordinate::new(-23.55, -46.63)).await?;
/// let history = store.list_all().await?;
/// assert_eq!(history.last().map(|r| r.id), Some(id));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LocationStore {
    pool: SqlitePool,
}

impl LocationStore {
    /// Opens a file-backed store, creating the database file and schema if
    /// they don't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileCreationError` if the file cannot be created,
    /// or `StoreError::SqlError` for connection and schema failures.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let pool = pool::connect_file(db_path).await?;
        schema::ensure_schema(&pool).await?;
        Ok(LocationStore { pool })
    }

    /// Opens an ephemeral in-memory store. Contents do not survive the pool.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let pool = pool::connect_memory().await?;
        schema::ensure_schema(&pool).await?;
        Ok(LocationStore { pool })
    }

    /// A preference store sharing this store's database handle.
    pub fn preferences(&self) -> PreferenceStore {
        PreferenceStore::from_pool(self.pool.clone())
    }

    /// Appends one coordinate and returns the newly assigned row id.
    ///
    /// No validation is performed beyond what the caller guarantees, and no
    /// retry is attempted on failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SqlError` if the write fails.
    pub async fn insert(&self, coordinate: &Coordinate) -> Result<i64, StoreError> {
        log::debug!(
            "Inserting location: latitude={}, longitude={}",
            coordinate.latitude,
            coordinate.longitude
        );

        // Use RETURNING clause to get the ID in a single query (SQLite 3.35.0+)
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO locations (latitude, longitude) VALUES (?, ?) RETURNING id",
        )
        .bind(coordinate.latitude)
        .bind(coordinate.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to insert location: {e}");
            StoreError::SqlError(e)
        })?;

        Ok(id)
    }

    /// Returns all stored records in insertion (id) order.
    ///
    /// The result is fully materialized; an empty store yields an empty `Vec`,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SqlError` if the read fails.
    pub async fn list_all(&self) -> Result<Vec<LocationRecord>, StoreError> {
        let rows = sqlx::query("SELECT id, latitude, longitude FROM locations ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list locations: {e}");
                StoreError::SqlError(e)
            })?;

        Ok(rows
            .into_iter()
            .map(|row| LocationRecord {
                id: row.get(0),
                latitude: row.get(1),
                longitude: row.get(2),
            })
            .collect())
    }
}

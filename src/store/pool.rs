//! Database connection pool management.
//!
//! This module initializes and configures the SQLite connection pool with:
//! - WAL mode enabled for concurrent access
//! - Automatic database file creation

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error::StoreError;

/// Connection string for an ephemeral in-memory database.
pub const MEMORY_DB_URI: &str = "sqlite::memory:";

/// Initializes and returns a connection pool for a file-backed database.
///
/// Creates the database file if it doesn't exist and enables WAL mode
/// for better concurrent access.
///
/// # Errors
///
/// Returns `StoreError::FileCreationError` if the file cannot be created,
/// or `StoreError::SqlError` if the connection or WAL pragma fails.
pub async fn connect_file(db_path: &Path) -> Result<SqlitePool, StoreError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&db_path_str)
    {
        Ok(_) => info!("Database file created successfully."),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Database file already exists.")
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(StoreError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            StoreError::SqlError(e)
        })?;

    // Enable WAL mode
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            StoreError::SqlError(e)
        })?;

    Ok(pool)
}

/// Initializes and returns a connection pool for an in-memory database.
///
/// Contents do not survive the pool; intended for tests and ephemeral use.
/// The pool holds exactly one permanent connection: every new connection to
/// `:memory:` opens a distinct, empty database, so the sole connection must
/// never be reaped for idleness or age while the pool lives.
pub async fn connect_memory() -> Result<SqlitePool, StoreError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(MEMORY_DB_URI)
        .await
        .map_err(|e| {
            error!("Failed to open in-memory database: {e}");
            StoreError::SqlError(e)
        })?;
    Ok(pool)
}

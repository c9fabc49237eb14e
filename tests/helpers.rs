// Shared test helpers for database setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::PathBuf;

use tempfile::TempDir;

use location_log::LocationStore;

/// Creates a temporary directory and returns it along with a database path inside it.
/// The directory is deleted when the returned `TempDir` is dropped.
pub fn temp_db_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("locations.db");
    (dir, path)
}

/// Opens a file-backed store at the given path, creating it if needed.
#[allow(dead_code)] // Used by other test files
pub async fn open_store(path: &PathBuf) -> LocationStore {
    LocationStore::open(path)
        .await
        .expect("Failed to open store")
}

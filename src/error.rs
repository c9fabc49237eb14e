//! Error types for store, provider, and capture operations.

use thiserror::Error;

/// Error types for database operations.
///
/// The store never catches or retries; failures are signalled synchronously
/// to the caller, who owns any user-facing messaging.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types surfaced by a [`LocationProvider`](crate::LocationProvider).
///
/// These originate in the external platform location service, not the store.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The user or platform denied the foreground location permission.
    #[error("Permission to access location was denied")]
    PermissionDenied,

    /// The provider could not acquire a position fix.
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Error types for the combined capture-and-store flow.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The location provider failed before a coordinate was obtained.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The store failed to persist or read back the coordinate.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

//! location_log library: durable local storage of captured GPS coordinates
//!
//! This library provides an append-only, SQLite-backed store for geographic
//! coordinates captured from a permission-gated platform location service,
//! plus a small key-value preference store for UI settings such as the
//! dark-mode flag. It is an embedded component: no network, no CLI — a GUI
//! layer calls in, renders the returned history, and owns all user-facing
//! messaging.
//!
//! # Example
//!
//! ```no_run
//! use location_log::{Coordinate, LocationStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LocationStore::open(std::path::Path::new("locations.db")).await?;
//!
//! let id = store.insert(&Coordinate::new(-23.55, -46.63)).await?;
//! for record in store.list_all().await? {
//!     println!("#{}: {}, {}", record.id, record.latitude, record.longitude);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod capture;
mod error;
pub mod logging;
mod models;
mod prefs;
mod store;

// Re-export public API
pub use capture::{capture, CaptureOutcome, LocationProvider};
pub use error::{CaptureError, ProviderError, StoreError};
pub use models::{Coordinate, LocationRecord};
pub use prefs::{PreferenceStore, DARK_MODE_KEY};
pub use store::LocationStore;

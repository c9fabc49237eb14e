//! Core data types shared across the crate.

use serde::{Deserialize, Serialize};

/// A geographic point supplied by a location provider.
///
/// Latitude is in degrees in `[-90, 90]`, longitude in degrees in
/// `[-180, 180]`. The store does not validate ranges; callers obtain
/// coordinates from a platform location service that already guarantees them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from a latitude/longitude pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

/// A stored location row as read back from the database.
///
/// # Database Schema
///
/// Maps directly to the `locations` table. `id` is assigned by SQLite on
/// insert and is unique and monotonically increasing; rows are never updated
/// or deleted, so id order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    /// Row id assigned on insert.
    pub id: i64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl LocationRecord {
    /// The coordinate held by this record.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

//! Permission-gated capture of the current position into the store.
//!
//! The platform location service sits behind the [`LocationProvider`] trait;
//! [`capture`] drives the same sequential awaited flow the surrounding UI
//! performs: request permission, read the current position, persist it, then
//! reload the full history for display.

use async_trait::async_trait;

use crate::error::{CaptureError, ProviderError};
use crate::models::{Coordinate, LocationRecord};
use crate::store::LocationStore;

/// Source of the device's current position, gated behind an OS permission.
///
/// Implementations wrap a platform geolocation service. Both methods are
/// awaited one at a time; no call is retried.
#[async_trait]
pub trait LocationProvider {
    /// Requests the foreground location permission.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::PermissionDenied` if the user or platform
    /// refuses.
    async fn request_permission(&self) -> Result<(), ProviderError>;

    /// Reads the device's current position.
    ///
    /// Only called after [`request_permission`](Self::request_permission)
    /// succeeded.
    async fn current_position(&self) -> Result<Coordinate, ProviderError>;
}

/// Result of a successful [`capture`] call.
#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    /// Id assigned to the newly stored coordinate.
    pub record_id: i64,
    /// Full stored history, including the new record, in insertion order.
    pub history: Vec<LocationRecord>,
}

/// Captures the current position and appends it to the store.
///
/// Requests permission, reads the position, inserts it, and returns the
/// refreshed history. Calls are strictly sequential; a failure at any step
/// propagates immediately and leaves no partial write (a denied permission or
/// failed fix never touches storage).
///
/// # Errors
///
/// Returns `CaptureError::Provider` if permission is denied or no position
/// can be acquired, and `CaptureError::Storage` if the insert or the
/// follow-up read fails.
pub async fn capture<P>(
    provider: &P,
    store: &LocationStore,
) -> Result<CaptureOutcome, CaptureError>
where
    P: LocationProvider + ?Sized,
{
    provider.request_permission().await?;

    let coordinate = provider.current_position().await?;
    log::debug!(
        "Captured position: latitude={}, longitude={}",
        coordinate.latitude,
        coordinate.longitude
    );

    let record_id = store.insert(&coordinate).await?;
    let history = store.list_all().await?;

    Ok(CaptureOutcome { record_id, history })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider {
        coordinate: Coordinate,
    }

    #[async_trait]
    impl LocationProvider for FixedProvider {
        async fn request_permission(&self) -> Result<(), ProviderError> {
            Ok(())
        }

        async fn current_position(&self) -> Result<Coordinate, ProviderError> {
            Ok(self.coordinate)
        }
    }

    struct DeniedProvider;

    #[async_trait]
    impl LocationProvider for DeniedProvider {
        async fn request_permission(&self) -> Result<(), ProviderError> {
            Err(ProviderError::PermissionDenied)
        }

        async fn current_position(&self) -> Result<Coordinate, ProviderError> {
            panic!("current_position must not be called after a denied permission");
        }
    }

    #[tokio::test]
    async fn test_capture_stores_and_returns_history() {
        let store = LocationStore::open_in_memory()
            .await
            .expect("Failed to open store");
        let provider = FixedProvider {
            coordinate: Coordinate::new(-23.55, -46.63),
        };

        let outcome = capture(&provider, &store).await.expect("capture failed");
        assert_eq!(outcome.record_id, 1);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.history[0].coordinate(), provider.coordinate);
    }

    #[tokio::test]
    async fn test_denied_permission_writes_nothing() {
        let store = LocationStore::open_in_memory()
            .await
            .expect("Failed to open store");

        let err = capture(&DeniedProvider, &store)
            .await
            .expect_err("capture should fail");
        assert!(matches!(
            err,
            CaptureError::Provider(ProviderError::PermissionDenied)
        ));

        let records = store.list_all().await.expect("list_all failed");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_captures_accumulate_history() {
        let store = LocationStore::open_in_memory()
            .await
            .expect("Failed to open store");

        for i in 1..=3 {
            let provider = FixedProvider {
                coordinate: Coordinate::new(10.0 * i as f64, 20.0 * i as f64),
            };
            let outcome = capture(&provider, &store).await.expect("capture failed");
            assert_eq!(outcome.record_id, i);
            assert_eq!(outcome.history.len(), i as usize);
        }
    }
}

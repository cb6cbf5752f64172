//! Test geocoders — mock `Geocoder` implementations for tests.

use async_trait::async_trait;
use tokio::sync::Notify;

use asobi_core::geocode::{GeocodeError, Geocoder, Placemark};

/// A geocoder that returns the same canned placemarks for every query.
/// Construct with an empty list to exercise the zero-candidate path.
#[derive(Debug)]
pub struct StaticGeocoder {
    placemarks: Vec<Placemark>,
}

impl StaticGeocoder {
    /// Create a new `StaticGeocoder` returning `placemarks` on every call.
    #[must_use]
    pub fn new(placemarks: Vec<Placemark>) -> Self {
        Self { placemarks }
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, _query: &str) -> Result<Vec<Placemark>, GeocodeError> {
        Ok(self.placemarks.clone())
    }
}

/// A geocoder that always reports a service failure. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingGeocoder;

#[async_trait]
impl Geocoder for FailingGeocoder {
    async fn geocode(&self, _query: &str) -> Result<Vec<Placemark>, GeocodeError> {
        Err(GeocodeError::Service("connection refused".into()))
    }
}

/// A geocoder whose response is held back until the test releases it.
///
/// `geocode` signals [`GatedGeocoder::entered`] once the request is in
/// flight, then waits for [`GatedGeocoder::release`] before responding.
/// This makes interleavings of overlapping searches deterministic.
#[derive(Debug)]
pub struct GatedGeocoder {
    placemarks: Vec<Placemark>,
    entered: Notify,
    release: Notify,
}

impl GatedGeocoder {
    /// Create a new `GatedGeocoder` returning `placemarks` once released.
    #[must_use]
    pub fn new(placemarks: Vec<Placemark>) -> Self {
        Self {
            placemarks,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Wait until a `geocode` call is in flight.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Allow one in-flight `geocode` call to respond.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl Geocoder for GatedGeocoder {
    async fn geocode(&self, _query: &str) -> Result<Vec<Placemark>, GeocodeError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.placemarks.clone())
    }
}

//! Geocoding collaborator seam.
//!
//! The geocoding service is an external collaborator reached over a network
//! this crate does not manage. Contexts depend on the trait; concrete
//! implementations (and test doubles) are injected.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A candidate returned by the geocoding collaborator.
///
/// The coordinate is optional: a collaborator may match a place without
/// being able to resolve its location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placemark {
    /// Human-readable name of the matched place, if any.
    pub name: Option<String>,
    /// Resolved coordinate, if any.
    pub coordinate: Option<Coordinate>,
}

/// Errors reported by the geocoding collaborator.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The collaborator failed (network failure, service outage, ...).
    #[error("geocoding service failure: {0}")]
    Service(String),

    /// The collaborator returned zero candidates for the query.
    #[error("no placemark matched the query")]
    NoMatch,
}

/// Resolves free-text location input into candidate placemarks.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Issue one geocoding request for `query` and return the candidates,
    /// ordered by the collaborator's own relevance ranking.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Service`] if the collaborator fails and
    /// [`GeocodeError::NoMatch`] if it reports zero candidates.
    async fn geocode(&self, query: &str) -> Result<Vec<Placemark>, GeocodeError>;
}

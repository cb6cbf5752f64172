//! Candidate selection and the resolved location value.

use asobi_core::geocode::{Coordinate, Placemark};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A successful resolution of a search query. Transient: each new
/// resolution supersedes the previous one, nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    /// The resolved coordinate.
    pub coordinate: Coordinate,
    /// Display label for the pin: the original query text, unmodified.
    pub label: String,
    /// When the resolution completed. Diagnostic only; overlapping
    /// searches race and this records which response was applied.
    pub resolved_at: DateTime<Utc>,
}

/// Picks the coordinate of the FIRST candidate, or `None` if that
/// candidate has no coordinate. Later candidates are never consulted,
/// matching the single-result contract.
#[must_use]
pub fn first_coordinate(placemarks: &[Placemark]) -> Option<Coordinate> {
    placemarks.first().and_then(|placemark| placemark.coordinate)
}

//! Asobi — map search context.
//!
//! Resolves free-text queries to a coordinate through the geocoding
//! collaborator seam and applies a pin placement plus a 500 m viewport to
//! an owned map-state sink consumed by the rendering layer.

pub mod application;
pub mod domain;

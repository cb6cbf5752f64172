//! Shared test mocks and utilities for the asobi mini-app cores.

mod clock;
mod geocoder;
mod rng;

pub use clock::FixedClock;
pub use geocoder::{FailingGeocoder, GatedGeocoder, StaticGeocoder};
pub use rng::{MockRng, SequenceRng};

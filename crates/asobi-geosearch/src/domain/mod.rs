//! Domain model for the map search context.

pub mod map;
pub mod resolution;

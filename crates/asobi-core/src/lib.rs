//! Asobi Core — shared seams and primitives.
//!
//! This crate defines the abstractions the two app contexts depend on:
//! deterministic randomness and time, the command trait, and the external
//! geocoding collaborator seam. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod geocode;
pub mod rng;

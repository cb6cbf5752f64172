//! Asobi — rock-paper-scissors picker context.
//!
//! Holds the current outcome, draws a new one on trigger with immediate
//! repetition excluded, and maps outcomes to display specifications for
//! the rendering layer.

pub mod application;
pub mod domain;

//! Domain model for the rock-paper-scissors context.

pub mod game;
pub mod outcome;
pub mod presenter;

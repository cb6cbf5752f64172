//! Application layer for the rock-paper-scissors context.

pub mod command_handlers;
pub mod query_handlers;

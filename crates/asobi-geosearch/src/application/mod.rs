//! Application layer for the map search context.

pub mod command_handlers;
pub mod query_handlers;
pub mod session;

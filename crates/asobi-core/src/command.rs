//! Command abstractions.
//!
//! Both app contexts are driven by UI-triggered commands (a play button
//! press, a query or style change). This trait gives handlers a uniform
//! surface for logging and correlation.

use uuid::Uuid;

/// Trait implemented by every command.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Short dotted name of the command, e.g. `janken.play`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID tying log lines for one trigger together.
    fn correlation_id(&self) -> Uuid;
}

//! Command handlers for the rock-paper-scissors context.

use asobi_core::command::Command;
use asobi_core::rng::DeterministicRng;
use uuid::Uuid;

use crate::domain::game::JankenGame;
use crate::domain::presenter::{self, DisplaySpec};

/// Command issued by the UI trigger (the play button).
#[derive(Debug)]
pub struct Play {
    /// Correlation ID to trace this command through the system.
    pub correlation_id: Uuid,
}

impl Command for Play {
    fn command_type(&self) -> &'static str {
        "janken.play"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Handles the `Play` command: draws a new outcome into the game and
/// returns the display specification for the rendering layer.
pub fn handle_play(
    command: &Play,
    game: &mut JankenGame,
    rng: &mut dyn DeterministicRng,
) -> DisplaySpec {
    let outcome = game.play(rng);
    tracing::debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id,
        ?outcome,
        "hand drawn"
    );
    presenter::present(outcome)
}

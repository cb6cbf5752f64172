//! Single owner of the current outcome.

use asobi_core::rng::DeterministicRng;

use super::outcome::{self, Outcome};

/// Owns the current outcome. The rendering layer reads it; only
/// [`JankenGame::play`] mutates it.
#[derive(Debug, Default)]
pub struct JankenGame {
    current: Outcome,
}

impl JankenGame {
    /// Creates a game in the initial not-yet-played state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current outcome.
    #[must_use]
    pub fn current(&self) -> Outcome {
        self.current
    }

    /// Draws a new outcome (never equal to the current one), stores it as
    /// the new current state, and returns it.
    pub fn play(&mut self, rng: &mut dyn DeterministicRng) -> Outcome {
        let next = outcome::draw(self.current, rng);
        self.current = next;
        next
    }
}

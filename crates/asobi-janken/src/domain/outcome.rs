//! The outcome state and the draw rule.

use asobi_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// One of the four rock-paper-scissors states, including the initial
/// not-yet-played state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing has been played yet. Never re-entered once a draw happens.
    #[default]
    Pending,
    /// Rock.
    Rock,
    /// Scissors.
    Scissors,
    /// Paper.
    Paper,
}

/// Draws a new outcome, excluding immediate repetition.
///
/// Samples uniformly from {Rock, Scissors, Paper} and resamples until the
/// result differs from `previous` (rejection sampling). When `previous` is
/// [`Outcome::Pending`] the first sample is always accepted. The result is
/// therefore uniform over the two hands that differ from a non-pending
/// `previous` (each with probability 1/2), not uniform over all three.
pub fn draw(previous: Outcome, rng: &mut dyn DeterministicRng) -> Outcome {
    loop {
        let candidate = match rng.next_u32_range(1, 3) {
            1 => Outcome::Rock,
            2 => Outcome::Scissors,
            _ => Outcome::Paper,
        };
        if candidate != previous {
            return candidate;
        }
    }
}

//! Query handlers for the rock-paper-scissors context.

use crate::domain::game::JankenGame;
use crate::domain::presenter::{self, DisplaySpec};

/// Returns the display specification for the game's current outcome.
#[must_use]
pub fn get_display(game: &JankenGame) -> DisplaySpec {
    presenter::present(game.current())
}

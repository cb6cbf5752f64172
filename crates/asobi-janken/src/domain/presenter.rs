//! Maps an outcome to a display specification for the rendering layer.

use serde::Serialize;

use super::outcome::Outcome;

/// What the rendering layer should show for an outcome. The image key
/// refers to an asset in the rendering layer's catalog; the pending state
/// has no image, only its prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplaySpec {
    /// Asset key of the hand image, if any.
    pub image_key: Option<&'static str>,
    /// Text shown under the image (or alone, for the pending state).
    pub label: &'static str,
}

/// Maps an outcome to its display specification. Pure and total.
#[must_use]
pub fn present(outcome: Outcome) -> DisplaySpec {
    match outcome {
        Outcome::Pending => DisplaySpec {
            image_key: None,
            label: "about to play",
        },
        Outcome::Rock => DisplaySpec {
            image_key: Some("rock"),
            label: "Rock",
        },
        Outcome::Scissors => DisplaySpec {
            image_key: Some("scissors"),
            label: "Scissors",
        },
        Outcome::Paper => DisplaySpec {
            image_key: Some("paper"),
            label: "Paper",
        },
    }
}

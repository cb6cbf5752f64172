//! Query handlers for the map search context.

use serde::Serialize;

use crate::domain::map::{MapStyle, Pin, Viewport};

use super::session::SearchSession;

/// Read-only view of the map state, consumed by the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    /// Rendering style.
    pub style: MapStyle,
    /// Placed pins, oldest first.
    pub pins: Vec<Pin>,
    /// Viewport to show, if any resolution has been applied yet.
    pub viewport: Option<Viewport>,
}

/// Returns the rendering layer's view of the session's map state.
#[must_use]
pub fn get_map_view(session: &SearchSession) -> MapView {
    let state = session.state_snapshot();
    MapView {
        style: state.style(),
        pins: state.pins().to_vec(),
        viewport: state.viewport(),
    }
}

//! Map state consumed by the rendering layer.
//!
//! The rendering layer is a pure sink: it receives style, pins, and
//! viewport and emits nothing back into the core.

use asobi_core::geocode::Coordinate;
use serde::Serialize;

/// Fixed viewport span, in meters, on both axes.
pub const VIEWPORT_SPAN_METERS: f64 = 500.0;

/// Rendering mode of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapStyle {
    /// Standard cartographic map.
    Standard,
    /// Satellite imagery.
    Satellite,
    /// Satellite imagery with transit labels.
    Hybrid,
}

/// A pin placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    /// Where the pin sits.
    pub coordinate: Coordinate,
    /// Title shown on the pin (the original query text).
    pub title: String,
}

/// The visible map region: a center plus a fixed physical span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Center of the visible region.
    pub center: Coordinate,
    /// North-south extent in meters.
    pub latitudinal_meters: f64,
    /// East-west extent in meters.
    pub longitudinal_meters: f64,
}

impl Viewport {
    /// Creates the standard viewport around a coordinate:
    /// [`VIEWPORT_SPAN_METERS`] on both axes.
    #[must_use]
    pub fn around(center: Coordinate) -> Self {
        Self {
            center,
            latitudinal_meters: VIEWPORT_SPAN_METERS,
            longitudinal_meters: VIEWPORT_SPAN_METERS,
        }
    }
}

/// Everything the rendering layer needs to draw the map.
///
/// Pins accumulate: applying a new resolution does not clear earlier pins
/// (deliberately kept from the observed behavior; see DESIGN notes).
#[derive(Debug, Clone, Serialize)]
pub struct MapState {
    style: MapStyle,
    pins: Vec<Pin>,
    viewport: Option<Viewport>,
}

impl MapState {
    /// Creates an empty map state with the given style: no pins, no
    /// viewport.
    #[must_use]
    pub fn new(style: MapStyle) -> Self {
        Self {
            style,
            pins: Vec::new(),
            viewport: None,
        }
    }

    /// Returns the current rendering style.
    #[must_use]
    pub fn style(&self) -> MapStyle {
        self.style
    }

    /// Returns the placed pins, oldest first.
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Returns the viewport, if one has been set.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Switches the rendering style.
    pub fn set_style(&mut self, style: MapStyle) {
        self.style = style;
    }

    /// Appends a pin. Earlier pins are kept.
    pub fn add_pin(&mut self, pin: Pin) {
        self.pins.push(pin);
    }

    /// Replaces the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }
}

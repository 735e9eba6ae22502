//! Viewport state and the zoom rules the rendering surface is driven by.

use vicinity_core::Coordinate;

/// Minimum zoom at which provider markers are placed. Below this the map
/// would be a smear of overlapping pins, so the scene omits them entirely.
pub const MARKER_VISIBILITY_MIN_ZOOM: f64 = 12.0;

/// Zoom applied when the viewport recenters on a fresh location fix.
pub const LOCATION_FOCUS_ZOOM: f64 = 14.0;

/// The visible map region: a center and a zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Whether provider markers are placed at the current zoom.
    ///
    /// The threshold is inclusive: exactly [`MARKER_VISIBILITY_MIN_ZOOM`]
    /// already shows markers.
    #[must_use]
    pub fn shows_provider_markers(&self) -> bool {
        self.zoom >= MARKER_VISIBILITY_MIN_ZOOM
    }

    /// Moves the center to `coordinate` at [`LOCATION_FOCUS_ZOOM`].
    ///
    /// Intended to be invoked once per changed location fix, not as
    /// continuous follow-the-user tracking.
    pub fn recenter_on(&mut self, coordinate: Coordinate) {
        self.center = coordinate;
        self.zoom = LOCATION_FOCUS_ZOOM;
    }
}

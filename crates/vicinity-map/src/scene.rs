//! Marker scene assembly.
//!
//! [`build_scene`] is the pure contract between the core and whatever
//! rendering surface draws the map: given ranked providers, the current
//! fix, the selection, and the viewport, it decides exactly which markers
//! exist this frame. The renderer draws the scene verbatim and routes
//! marker taps back through the selection cell.

use vicinity_core::{Coordinate, LocationReading, RankedProvider};

use crate::viewport::Viewport;

/// A placed provider marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderMarker {
    pub id: String,
    pub position: Coordinate,
    pub name: String,
    /// Distance label from the ranking pass, when one was computed.
    pub distance_label: Option<String>,
    /// Derived from the shared selection cell; exactly one marker per scene
    /// can be selected.
    pub selected: bool,
}

/// The user's own position marker with its accuracy radius.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMarker {
    pub position: Coordinate,
    pub accuracy_m: Option<f64>,
}

/// Everything the rendering surface draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub providers: Vec<ProviderMarker>,
    pub user: Option<UserMarker>,
}

/// Builds the marker scene for one frame.
///
/// Provider markers are placed only when the viewport's zoom shows them,
/// and records without a coordinate are never placed. The user marker is
/// exempt from the zoom rule: it renders whenever a reading exists.
#[must_use]
pub fn build_scene(
    providers: &[RankedProvider],
    reading: Option<&LocationReading>,
    selected_id: Option<&str>,
    viewport: &Viewport,
) -> MapScene {
    let provider_markers = if viewport.shows_provider_markers() {
        providers
            .iter()
            .filter_map(|ranked| {
                let position = ranked.provider.coordinate?;
                Some(ProviderMarker {
                    id: ranked.provider.id.clone(),
                    position,
                    name: ranked.provider.name.clone(),
                    distance_label: ranked.distance_label().map(str::to_owned),
                    selected: selected_id == Some(ranked.provider.id.as_str()),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    MapScene {
        providers: provider_markers,
        user: reading.map(|reading| UserMarker {
            position: reading.coordinate,
            accuracy_m: reading.accuracy_m,
        }),
    }
}

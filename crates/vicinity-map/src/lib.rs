pub mod scene;
pub mod viewport;

pub use scene::{build_scene, MapScene, ProviderMarker, UserMarker};
pub use viewport::{Viewport, LOCATION_FOCUS_ZOOM, MARKER_VISIBILITY_MIN_ZOOM};

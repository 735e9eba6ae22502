//! Provider records and their per-render distance annotations.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A provider entry as observed from the external feed.
///
/// This is a read-only copy: the feed owns and mutates the underlying
/// document, the core only reads it and attaches derived data. `coordinate`
/// is `None` when the source document carried no usable latitude/longitude;
/// such records stay visible to consumers but never enter distance math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Feed-assigned document id, opaque to the core.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category slug, e.g. `"plumbing"`.
    pub category: String,
    pub coordinate: Option<Coordinate>,
    /// Free-form contact/rating fields, carried through untouched.
    pub address: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
}

/// Distance annotation attached during a ranking pass.
///
/// `label` is always the [`crate::geo::format_distance`] rendering of `km`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    /// Great-circle distance from the device fix, in kilometers. Never
    /// negative.
    pub km: f64,
    pub label: String,
}

/// A provider plus its optional distance annotation.
///
/// Built fresh on every ranking pass and held for one render cycle only.
/// `distance` is `None` exactly when no distance could be computed: either
/// there is no location fix, or the record has no usable coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedProvider {
    pub provider: ProviderRecord,
    pub distance: Option<Distance>,
}

impl RankedProvider {
    /// Distance in kilometers, when one was computed.
    #[must_use]
    pub fn distance_km(&self) -> Option<f64> {
        self.distance.as_ref().map(|d| d.km)
    }

    /// Human-readable distance, when one was computed.
    #[must_use]
    pub fn distance_label(&self) -> Option<&str> {
        self.distance.as_ref().map(|d| d.label.as_str())
    }
}

//! Great-circle distance math and display formatting.
//!
//! Flat pairwise computation only; candidate sets are small enough that no
//! spatial partitioning or caching is involved anywhere in the core.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, the fixed sphere for the haversine
/// formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 coordinate in decimal degrees.
///
/// The math functions assume latitude in `[-90, 90]` and longitude in
/// `[-180, 180]` and do not validate; out-of-range inputs are a caller
/// error. [`Coordinate::is_valid`] exists for boundary code that ingests
/// untrusted wire data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside the WGS-84 range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Great-circle distance between two coordinates in kilometers, via the
/// haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// Total over valid coordinates: no side effects, no failure modes.
/// Identical inputs yield exactly `0.0`, and the function is symmetric
/// within floating-point tolerance.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // atan2 keeps this total even when float error pushes h a hair past 1.0.
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_KM * c
}

/// Render a distance for display: whole meters below 1 km, kilometers with
/// exactly one decimal at or above it.
///
/// The threshold is strict at 1.0: `0.999` km formats as `"999 m"`, exactly
/// `1.0` km formats as `"1.0 km"`.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round())
    } else {
        format!("{km:.1} km")
    }
}

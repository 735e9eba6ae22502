//! Positioning backends: the platform seam behind [`crate::LocationSource`].

use std::time::Duration;

use async_trait::async_trait;

use vicinity_core::Coordinate;

use crate::error::PositionError;

/// Policy for a single position acquisition.
///
/// `timeout` is enforced by the source, not the backend; backends only need
/// to honor `high_accuracy` and `max_staleness`. `max_staleness` is fixed at
/// zero in the reference behavior: a backend must never serve a cached fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquireOptions {
    /// Bounded wait for the whole acquisition.
    pub timeout: Duration,
    /// Request the platform's high-accuracy mode.
    pub high_accuracy: bool,
    /// Maximum acceptable age of a fix. Zero means freshly acquired only.
    pub max_staleness: Duration,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            high_accuracy: true,
            max_staleness: Duration::ZERO,
        }
    }
}

/// A raw platform fix, before the source stamps it into a
/// [`vicinity_core::LocationReading`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coordinate: Coordinate,
    /// Reported horizontal accuracy radius in meters, when known.
    pub accuracy_m: Option<f64>,
}

/// A platform positioning capability.
///
/// Implementations resolve exactly one fresh fix per call. They should not
/// enforce `options.timeout` themselves; the source wraps every call in its
/// own bounded wait.
#[async_trait]
pub trait PositionBackend: Send + Sync {
    /// Acquire a single position fix.
    ///
    /// # Errors
    ///
    /// - [`PositionError::PermissionDenied`] when access is refused.
    /// - [`PositionError::Unavailable`] when no fix can be produced.
    async fn acquire(&self, options: AcquireOptions) -> Result<Position, PositionError>;
}

/// Backend that always resolves a configured position.
///
/// Used when the caller supplies an explicit coordinate (manual entry, demo
/// flags) and by tests that need a deterministic fix.
#[derive(Debug, Clone, Copy)]
pub struct StaticBackend {
    position: Position,
}

impl StaticBackend {
    #[must_use]
    pub fn new(coordinate: Coordinate, accuracy_m: Option<f64>) -> Self {
        Self {
            position: Position {
                coordinate,
                accuracy_m,
            },
        }
    }
}

#[async_trait]
impl PositionBackend for StaticBackend {
    async fn acquire(&self, _options: AcquireOptions) -> Result<Position, PositionError> {
        Ok(self.position)
    }
}

/// Meters per degree of latitude, used to convert jitter radii to degrees.
const METERS_PER_LAT_DEGREE: f64 = 111_320.0;

/// Backend that resolves a configured center plus per-acquisition jitter.
///
/// Each call lands uniformly within `jitter_m` meters of the center, so
/// repeated refreshes produce visibly different readings. An optional
/// artificial delay makes the `Requesting` state observable in demos.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    center: Coordinate,
    jitter_m: f64,
    delay: Duration,
}

impl SimulatedBackend {
    #[must_use]
    pub fn new(center: Coordinate, jitter_m: f64) -> Self {
        Self {
            center,
            jitter_m,
            delay: Duration::ZERO,
        }
    }

    /// Sleep this long before resolving each acquisition.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn jittered(&self) -> Coordinate {
        let lat_offset = unit_interval() * self.jitter_m / METERS_PER_LAT_DEGREE;
        let lon_scale = METERS_PER_LAT_DEGREE * self.center.latitude.to_radians().cos();
        let lon_offset = unit_interval() * self.jitter_m / lon_scale;
        Coordinate::new(
            self.center.latitude + lat_offset,
            self.center.longitude + lon_offset,
        )
    }
}

/// Uniform random value in `[-1, 1]`.
fn unit_interval() -> f64 {
    rand::random::<f64>() * 2.0 - 1.0
}

#[async_trait]
impl PositionBackend for SimulatedBackend {
    async fn acquire(&self, _options: AcquireOptions) -> Result<Position, PositionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Position {
            coordinate: self.jittered(),
            accuracy_m: Some(self.jitter_m),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_backend_resolves_the_configured_position() {
        let backend = StaticBackend::new(Coordinate::new(12.9716, 77.5946), Some(8.0));
        let position = backend
            .acquire(AcquireOptions::default())
            .await
            .expect("static backend never fails");
        assert_eq!(position.coordinate, Coordinate::new(12.9716, 77.5946));
        assert_eq!(position.accuracy_m, Some(8.0));
    }

    #[tokio::test]
    async fn simulated_backend_stays_within_the_jitter_radius() {
        let center = Coordinate::new(12.9716, 77.5946);
        let backend = SimulatedBackend::new(center, 250.0);
        for _ in 0..20 {
            let position = backend
                .acquire(AcquireOptions::default())
                .await
                .expect("simulated backend never fails");
            let drift = vicinity_core::distance_km(center, position.coordinate);
            // Independent lat/lon jitter: worst case is the diagonal of a
            // 250 m square, well under 400 m.
            assert!(drift * 1000.0 <= 400.0, "drifted {:.0} m", drift * 1000.0);
            assert!(position.coordinate.is_valid());
        }
    }

    #[tokio::test]
    async fn simulated_backend_reports_jitter_as_accuracy() {
        let backend = SimulatedBackend::new(Coordinate::new(0.0, 0.0), 100.0);
        let position = backend
            .acquire(AcquireOptions::default())
            .await
            .expect("simulated backend never fails");
        assert_eq!(position.accuracy_m, Some(100.0));
    }

    #[test]
    fn default_options_match_the_reference_policy() {
        let options = AcquireOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert!(options.high_accuracy);
        assert_eq!(options.max_staleness, Duration::ZERO);
    }
}

//! Positioning flags and the backend wiring behind them.

use std::sync::Arc;
use std::time::Duration;

use vicinity_core::{AppConfig, Coordinate};
use vicinity_location::{
    AcquireOptions, LocationSource, LocationState, PositionBackend, SimulatedBackend, StaticBackend,
};

#[derive(Debug, clap::Args)]
pub(crate) struct PositionArgs {
    /// Fixed latitude for a deterministic fix (requires --lon)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub(crate) lat: Option<f64>,
    /// Fixed longitude for a deterministic fix (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub(crate) lon: Option<f64>,
    /// Simulate fixes near this center, drifting a little on every refresh
    #[arg(
        long,
        value_name = "LAT,LON",
        value_parser = parse_coordinate,
        default_value = "12.9716,77.5946",
        conflicts_with_all = ["lat", "lon"],
        allow_negative_numbers = true
    )]
    pub(crate) simulate_near: Coordinate,
    /// Jitter radius in meters for simulated fixes
    #[arg(long, default_value_t = 150.0)]
    pub(crate) jitter_m: f64,
}

impl PositionArgs {
    /// Center the map pane starts on before any fix arrives.
    pub(crate) fn start_center(&self) -> Coordinate {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
            _ => self.simulate_near,
        }
    }
}

/// Parse a `"LAT,LON"` pair into a validated [`Coordinate`].
pub(crate) fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{raw}'"))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("bad latitude '{lat}': {e}"))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("bad longitude '{lon}': {e}"))?;
    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        return Err(format!(
            "({latitude}, {longitude}) is outside the valid coordinate range"
        ));
    }
    Ok(coordinate)
}

/// Build the positioning backend the flags describe: a static fix when
/// `--lat/--lon` are given, otherwise a jittered simulation.
pub(crate) fn build_backend(args: &PositionArgs) -> anyhow::Result<Arc<dyn PositionBackend>> {
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        let coordinate = Coordinate::new(lat, lon);
        if !coordinate.is_valid() {
            return Err(anyhow::anyhow!(
                "--lat/--lon ({lat}, {lon}) is outside the valid coordinate range"
            ));
        }
        return Ok(Arc::new(StaticBackend::new(coordinate, None)));
    }
    Ok(Arc::new(SimulatedBackend::new(
        args.simulate_near,
        args.jitter_m,
    )))
}

pub(crate) fn acquire_options(config: &AppConfig) -> AcquireOptions {
    AcquireOptions {
        timeout: Duration::from_secs(config.location_timeout_secs),
        ..AcquireOptions::default()
    }
}

/// Wait until the source leaves `Idle`/`Requesting` and return that state.
pub(crate) async fn wait_for_fix(source: &LocationSource) -> LocationState {
    let mut states = source.subscribe();
    loop {
        {
            let state = states.borrow_and_update();
            if state.is_terminal() {
                return state.clone();
            }
        }
        if states.changed().await.is_err() {
            return source.current();
        }
    }
}

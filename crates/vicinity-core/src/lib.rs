//! Domain types and pure logic for the vicinity proximity core.
//!
//! This crate is the leaf of the workspace: coordinates and great-circle
//! math ([`geo`]), provider records and their per-render distance
//! annotations ([`provider`]), the distance ranker ([`rank`]), the service
//! category registry ([`categories`]), and env-driven configuration
//! ([`config`]). Everything here is synchronous and side-effect free; the
//! async plumbing lives in `vicinity-location`, `vicinity-feed`, and
//! `vicinity-session`.

pub mod app_config;
pub mod categories;
pub mod config;
pub mod geo;
pub mod provider;
pub mod rank;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{load_categories, CategoriesFile, CategoryConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_km, format_distance, Coordinate, EARTH_RADIUS_KM};
pub use provider::{Distance, ProviderRecord, RankedProvider};
pub use rank::rank_by_distance;

/// A successfully acquired device location fix.
///
/// Immutable once produced: a newer fix supersedes it, nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReading {
    pub coordinate: Coordinate,
    /// Reported horizontal accuracy radius in meters, when the platform
    /// provides one.
    pub accuracy_m: Option<f64>,
    /// When the fix was resolved, stamped by the location source.
    pub acquired_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read categories file {path}: {source}")]
    CategoriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse categories file: {0}")]
    CategoriesFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

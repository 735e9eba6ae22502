//! Device location acquisition for the vicinity proximity core.
//!
//! [`LocationSource`] bridges a platform positioning capability (the
//! [`PositionBackend`] trait) to an observable [`LocationState`] published
//! through a `tokio::sync::watch` channel. Acquisition is single-shot and
//! bounded; failures become state, never panics or propagated errors.

pub mod backend;
pub mod error;
pub mod source;

pub use backend::{AcquireOptions, Position, PositionBackend, SimulatedBackend, StaticBackend};
pub use error::PositionError;
pub use source::{LocationSource, LocationState};

//! The location source: a single-shot acquisition state machine published
//! through a watch channel.
//!
//! State machine: `Idle → Requesting → { Available, PermissionDenied,
//! Unavailable, TimedOut }`. [`LocationSource::refresh`] re-enters
//! `Requesting` from any state. Every failure is contained here and exposed
//! as state; consumers treat "no reading" as "no distance can be computed"
//! and fall back to an unordered provider list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use vicinity_core::LocationReading;

use crate::backend::{AcquireOptions, PositionBackend};
use crate::error::PositionError;

/// Observable state of the device location.
///
/// States are replaced wholesale: a success clears any prior failure
/// message, and a failure drops any prior reading.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    /// No acquisition has been issued yet.
    Idle,
    /// An acquisition is in flight.
    Requesting,
    /// A fix was acquired.
    Available(LocationReading),
    /// Location access was refused; recoverable via [`LocationSource::refresh`].
    PermissionDenied { message: String },
    /// The platform could not produce a fix.
    Unavailable { message: String },
    /// The bounded wait elapsed before the backend resolved.
    TimedOut { message: String },
}

impl LocationState {
    /// The current reading, when one is available.
    #[must_use]
    pub fn reading(&self) -> Option<&LocationReading> {
        match self {
            LocationState::Available(reading) => Some(reading),
            _ => None,
        }
    }

    /// User-facing banner text for the failure states.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            LocationState::PermissionDenied { message }
            | LocationState::Unavailable { message }
            | LocationState::TimedOut { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_requesting(&self) -> bool {
        matches!(self, LocationState::Requesting)
    }

    /// Whether the state is an acquisition outcome rather than `Idle` or
    /// `Requesting`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LocationState::Idle | LocationState::Requesting)
    }
}

/// Bridge from a [`PositionBackend`] to an observable [`LocationState`].
///
/// Construction immediately issues the first acquisition (the "on mount"
/// `Idle → Requesting` transition). Each acquisition is single-shot and
/// bounded by `options.timeout`; a superseding [`refresh`](Self::refresh)
/// bumps a request generation so a stale in-flight result is discarded on
/// arrival instead of overwriting the newer request's outcome.
pub struct LocationSource {
    backend: Arc<dyn PositionBackend>,
    options: AcquireOptions,
    state: watch::Sender<LocationState>,
    generation: Arc<AtomicU64>,
}

impl LocationSource {
    /// Build the source and issue the first acquisition.
    ///
    /// Must be called from within a tokio runtime; acquisitions run as
    /// spawned tasks so the caller is never blocked.
    #[must_use]
    pub fn spawn(backend: Arc<dyn PositionBackend>, options: AcquireOptions) -> Self {
        let (state, _) = watch::channel(LocationState::Idle);
        let source = Self {
            backend,
            options,
            state,
            generation: Arc::new(AtomicU64::new(0)),
        };
        source.refresh();
        source
    }

    /// Observe state transitions. Many receivers may watch the same source.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.state.subscribe()
    }

    /// The current state, cloned out of the channel.
    #[must_use]
    pub fn current(&self) -> LocationState {
        self.state.borrow().clone()
    }

    /// Re-enter `Requesting` and repeat the acquisition under the same
    /// timeout and staleness policy.
    ///
    /// Concurrent refreshes are not coalesced: each issues its own backend
    /// call, and only the most recent request's outcome is published. A
    /// result arriving for a superseded generation is logged and dropped.
    pub fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LocationState::Requesting);

        let backend = Arc::clone(&self.backend);
        let options = self.options;
        let state = self.state.clone();
        let current_generation = Arc::clone(&self.generation);

        tokio::spawn(async move {
            let outcome = tokio::time::timeout(options.timeout, backend.acquire(options)).await;
            let next = resolve_state(outcome, options);

            if current_generation.load(Ordering::SeqCst) == generation {
                state.send_replace(next);
            } else {
                tracing::debug!(generation, "discarding stale location result");
            }
        });
    }
}

/// Map an acquisition outcome to the state it publishes.
fn resolve_state(
    outcome: Result<Result<crate::backend::Position, PositionError>, tokio::time::error::Elapsed>,
    options: AcquireOptions,
) -> LocationState {
    match outcome {
        Ok(Ok(position)) => {
            tracing::debug!(
                latitude = position.coordinate.latitude,
                longitude = position.coordinate.longitude,
                "location fix acquired"
            );
            LocationState::Available(LocationReading {
                coordinate: position.coordinate,
                accuracy_m: position.accuracy_m,
                acquired_at: Utc::now(),
            })
        }
        Ok(Err(err @ PositionError::PermissionDenied(_))) => {
            tracing::warn!(error = %err, "location permission refused");
            LocationState::PermissionDenied {
                message: err.to_string(),
            }
        }
        Ok(Err(err @ PositionError::Unavailable(_))) => {
            tracing::warn!(error = %err, "location acquisition failed");
            LocationState::Unavailable {
                message: err.to_string(),
            }
        }
        Err(_) => {
            let message = format!("no location fix within {}s", options.timeout.as_secs());
            tracing::warn!("{message}");
            LocationState::TimedOut { message }
        }
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

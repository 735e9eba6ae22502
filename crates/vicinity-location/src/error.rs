use thiserror::Error;

/// Errors a positioning backend can report for a single acquisition.
///
/// The variants carry the platform's own message so the surfaced banner text
/// can distinguish a refused prompt from a dead signal. Timeouts are not a
/// backend error: the source bounds the wait itself and reports
/// [`crate::LocationState::TimedOut`] when it elapses.
#[derive(Debug, Error)]
pub enum PositionError {
    /// The user or platform refused location access.
    #[error("location permission denied: {0}")]
    PermissionDenied(String),

    /// The platform could not produce a fix (no signal, positioning
    /// unsupported, hardware off).
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

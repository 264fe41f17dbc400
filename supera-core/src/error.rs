//! Error types for supera-core.

use crate::particle::TrackId;
use thiserror::Error;

/// Result type alias for supera operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for supera operations.
///
/// Malformed ancestry (dangling or cyclic parents) is never an error; these
/// variants cover structurally invalid input and configuration only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A lookup table does not line up with the particle sequence.
    #[error("{what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The same track id appears twice in one event.
    #[error("duplicate track id {0} in event")]
    DuplicateTrackId(TrackId),

    /// A record failed the particle validity check.
    #[error("invalid particle {track_id}: {reason}")]
    InvalidParticle { track_id: TrackId, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

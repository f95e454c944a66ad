//! Error types for the composition engine.
//!
//! Only out-of-contract caller input becomes an error; every valid-input
//! degenerate case (empty buffers, zero peaks, sub-sample durations) has a
//! defined deterministic output instead.

use thiserror::Error;

use songforge_synth::SynthError;

/// Result type for composition operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors that can occur while generating or editing a song.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Requested duration was zero or negative.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f32,
    },

    /// Tempo was zero.
    #[error("invalid tempo: {tempo} bpm")]
    InvalidTempo {
        /// The invalid tempo.
        tempo: u32,
    },

    /// Resampling ratio was zero or negative.
    #[error("invalid resample ratio: {ratio}")]
    InvalidRatio {
        /// The invalid ratio.
        ratio: f32,
    },

    /// Equalizer profile held no bands.
    #[error("equalizer profile must contain at least one band")]
    EmptyProfile,

    /// Section order was not a permutation of the current sections.
    #[error("section order must reference each section exactly once")]
    InvalidOrder,

    /// The injected template store holds no templates.
    #[error("template store holds no templates")]
    EmptyStore,

    /// Synthesis-boundary failure (WAV I/O).
    #[error(transparent)]
    Synth(#[from] SynthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ComposeError::InvalidDuration { duration: -1.0 };
        assert!(err.to_string().contains("-1"));

        let err = ComposeError::InvalidOrder;
        assert!(err.to_string().contains("exactly once"));
    }
}

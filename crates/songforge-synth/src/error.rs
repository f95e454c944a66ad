//! Error types for the synthesis backend.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur in the synthesis backend.
///
/// Pure rendering never fails: degenerate inputs (empty buffers, zero
/// peaks, sub-sample durations) all have defined outputs. Only the WAV
/// boundary can error.
#[derive(Debug, Error)]
pub enum SynthError {
    /// I/O error while writing or reading audio files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unsupported WAV input.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

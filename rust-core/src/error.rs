//! Error types for chirp-z evaluation

use thiserror::Error;

/// Errors raised by the transform, the band wrapper and the analyzers.
///
/// Every failure is immediate and deterministic: either a complete output
/// vector is produced or one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CztError {
    #[error("input sequence is empty")]
    EmptyInput,

    #[error("invalid length for `{name}`: {value} ({reason})")]
    InvalidLength {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    #[error("plan expects {expected} input samples, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("degenerate contour: `{name}` must be nonzero")]
    DegenerateContour { name: &'static str },

    #[error("parameter `{name}` is not finite: {value}")]
    NonFiniteParameter { name: &'static str, value: String },

    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f64),

    #[error("dB reference must be finite and positive, got {0}")]
    InvalidReference(f64),

    #[error("FFT length {required} exceeds limit of {limit}")]
    FftTooLarge { required: usize, limit: usize },

    #[error("contour weights overflow while building {stage}")]
    NonFiniteWeights { stage: &'static str },

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CztError>;

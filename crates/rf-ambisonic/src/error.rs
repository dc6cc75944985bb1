//! Error types for ambisonic encoding

use thiserror::Error;

use crate::tables::MAX_ORDER;

/// Ambisonic encoder error types
///
/// The gain computation itself never fails. These cover the edges where the
/// caller asked for strict validation or handed in malformed buffers.
#[derive(Error, Debug)]
pub enum SpatialError {
    /// Invalid channel count
    #[error("Invalid channel count: expected {expected}, got {got}")]
    InvalidChannelCount { expected: usize, got: usize },

    /// Invalid Ambisonic order
    #[error("Invalid Ambisonic order: {0} (max supported: {max})", max = MAX_ORDER)]
    InvalidAmbisonicOrder(usize),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for ambisonic operations
pub type SpatialResult<T> = Result<T, SpatialError>;

use thiserror::Error;

/// Errors produced by network construction, inference, training and
/// persistence. Every fallible operation propagates one of these to the
/// immediate caller; nothing is retried or swallowed internally.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("invalid topology: {reason}")]
    InvalidTopology { reason: String },

    #[error("input size mismatch: expected {expected} values, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("target size mismatch: expected {expected} values, got {actual}")]
    TargetSizeMismatch { expected: usize, actual: usize },

    #[error("topology mismatch: {detail}")]
    TopologyMismatch { detail: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

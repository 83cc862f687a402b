//! Error types for the navbar core.

use thiserror::Error;

/// Timer-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already fired or been stopped.
    #[error("invalid or expired timer ID")]
    InvalidTimerId,
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, TimerError>;

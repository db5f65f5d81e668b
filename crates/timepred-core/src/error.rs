//! Error types for timepred

use thiserror::Error;

use crate::Timestamp;

/// Core timepred errors
///
/// Relations never fail. These are only produced by the checked
/// constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimepredError {
    #[error("Inverted interval: start {start} is after end {end}")]
    InvertedInterval { start: Timestamp, end: Timestamp },

    #[error("Degenerate interval: start and end coincide at {at}")]
    DegenerateInterval { at: Timestamp },

    #[error("System time out of range for a nanosecond timestamp")]
    TimestampOutOfRange,
}

/// Result type for timepred operations
pub type TimepredResult<T> = Result<T, TimepredError>;

//! Error taxonomy for the scoring engine.
//!
//! Indicator-level absence (window too short for one indicator) is not an
//! error: those functions return `None` and the scorer drops the vote.
//! Errors here are fatal to a single evaluation call.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TaError {
    /// The series is too short for the composite scorer as a whole.
    #[error("not enough data: got {got} bars, need at least {required}")]
    InsufficientData { got: usize, required: usize },

    /// A bar failed boundary validation (non-finite or non-positive fields).
    #[error("malformed bar at index {index}: {reason}")]
    MalformedInput { index: usize, reason: String },
}

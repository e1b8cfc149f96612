//! Error types for the fuzzy engine
//!
//! These errors are internal to the inference pipeline: the public evaluator
//! absorbs them through the heuristic fallback and never returns an error to
//! its caller.

use thiserror::Error;

/// Fuzzy engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Aggregate output curve carries no mass, so the centroid is undefined
    #[error("Degenerate aggregation: total membership mass {0} is effectively zero")]
    DegenerateAggregate(f64),

    /// Centroid computation produced a non-finite value
    #[error("Non-finite centroid: {0}")]
    NonFiniteCentroid(f64),

    /// Invalid membership function definition
    #[error("Invalid membership function: {0}")]
    InvalidMembership(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

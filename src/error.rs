//! Error types for the Lifescope engine.
//!
//! This module provides a unified error type for all fallible operations in
//! the crate, using the `thiserror` crate for ergonomic error handling.
//!
//! Out-of-range single-cell edits are not errors (they are ignored), and the
//! analysis measures are total over any grid, so the taxonomy is small.

use thiserror::Error;

/// The main error type for Lifescope operations.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Grid dimensions are zero or too large to address
    #[error("Invalid grid dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Randomization probability outside [0, 1]
    #[error("Invalid probability: {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for Lifescope operations.
pub type Result<T> = std::result::Result<T, LifeError>;

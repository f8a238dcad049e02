//! Error types for descriptor loading and validation.

use std::io;
use thiserror::Error;

/// Descriptor error.
#[derive(Debug, Error)]
pub enum ModelError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or incomplete JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Declared view count disagrees with a position array.
    #[error("{field} has {got} entries, expected {expected}")]
    LengthMismatch {
        /// Offending field name.
        field: &'static str,
        /// Declared view count.
        expected: usize,
        /// Actual array length.
        got: usize,
    },

    /// Descriptor declares no views or no pixels.
    #[error("empty descriptor: {0}")]
    Empty(String),

    /// View positions are not strictly increasing in x.
    #[error("view {index} at x={x} is not right of view {prev} at x={prev_x}")]
    NotSorted {
        /// Index of the offending view.
        index: usize,
        /// Its x coordinate.
        x: f32,
        /// Index of the preceding view.
        prev: usize,
        /// Preceding x coordinate.
        prev_x: f32,
    },

    /// View lies on the wrong side of the screen plane.
    #[error("view {index} has z={z}, expected {expected} the screen")]
    WrongSide {
        /// Index of the offending view.
        index: usize,
        /// Its z coordinate.
        z: f32,
        /// "in front of" or "behind".
        expected: &'static str,
    },
}

/// Result type for descriptor operations.
pub type ModelResult<T> = Result<T, ModelError>;

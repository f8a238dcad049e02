//! Error types for I/O operations.
//!
//! Provides unified error handling for all layer codecs and stack directories.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Layers of one stack decoded to different sizes.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Missing required data.
    #[error("missing data: {0}")]
    MissingData(String),

    /// Image buffer error.
    #[error(transparent)]
    Core(#[from] lfd_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

//! Error types for lfd-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the image containers:
//! - Invalid sizes passed to constructors
//! - Layers of different sizes combined into one stack
//! - Raw data whose length does not match the declared dimensions
//!
//! # Usage
//!
//! ```rust
//! use lfd_core::{Error, Result};
//!
//! fn check(width: usize, height: usize) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "zero area"));
//!     }
//!     Ok(())
//! }
//! assert!(check(0, 4).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::image::Image`] - Construction from raw data
//! - [`crate::layered::LayeredImage`] - Stack assembly
//! - `lfd-io`, `lfd-interp` - Wrapped into their own error enums

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or combining image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Image dimensions don't match for the operation.
    ///
    /// Returned when layers of a [`crate::LayeredImage`] would end up with
    /// different sizes.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: usize,
        /// First image height
        a_height: usize,
        /// Second image width
        b_width: usize,
        /// Second image height
        b_height: usize,
    },

    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero where a populated buffer is
    /// required, or when raw data length disagrees with the dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Stack depth differs from what the caller declared.
    #[error("layer count mismatch: expected {expected}, got {got}")]
    LayerCountMismatch {
        /// Expected number of layers
        expected: usize,
        /// Actual number of layers
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::LayerCountMismatch`] error.
    #[inline]
    pub fn layer_count_mismatch(expected: usize, got: usize) -> Self {
        Self::LayerCountMismatch { expected, got }
    }
}

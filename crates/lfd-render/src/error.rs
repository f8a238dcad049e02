//! Error types for rendering.

use lfd_model::ModelError;
use thiserror::Error;

/// Error type for rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The display descriptor driving the render is invalid.
    #[error("invalid display model: {0}")]
    Model(#[from] ModelError),

    /// Rendered layers could not form a stack.
    #[error(transparent)]
    Image(#[from] lfd_core::Error),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

//! Error types for light-field conversion and simulation.

use std::path::PathBuf;

use lfd_model::ModelError;
use thiserror::Error;

/// Result type for interpolation operations.
pub type InterpResult<T> = Result<T, InterpError>;

/// Errors raised before any output is produced.
///
/// Every conversion validates its inputs up front, so an error never leaves a
/// half-written stack behind.
#[derive(Debug, Error)]
pub enum InterpError {
    /// A descriptor failed validation.
    #[error("invalid display model: {0}")]
    Model(#[from] ModelError),

    /// The two descriptors disagree on resolution or screen size.
    #[error("incompatible models: {what} differs ({from} vs {to})")]
    Incompatible {
        /// Which property differs.
        what: &'static str,
        /// Value on the source model.
        from: String,
        /// Value on the target model.
        to: String,
    },

    /// An image stack does not match its descriptor.
    #[error("stack does not match '{model}': {reason}")]
    StackMismatch {
        /// Descriptor name.
        model: String,
        /// Underlying shape error.
        reason: lfd_core::Error,
    },

    /// A tunable is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

//! Error types for the transaction processor plugin.
//!
//! Validation problems in user input are never errors here: they are data,
//! carried by [`ValidationResult`](crate::domain::ValidationResult). This
//! module covers the infrastructure that can genuinely fail (theme loading,
//! configuration, filesystem access for trace export).

use thiserror::Error;

/// The main error type for plugin operations outside the validator.
///
/// # Examples
///
/// ```
/// use transaction_processor::domain::ProcessorError;
///
/// fn load_theme() -> Result<(), ProcessorError> {
///     Err(ProcessorError::Theme("unknown colour key".to_string()))
/// }
///
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, ProcessorError>;

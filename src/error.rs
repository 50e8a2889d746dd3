//! Error types for the pay estimator.
//!
//! The calculation engine itself is total and never fails. Errors only arise
//! while loading or validating rate configuration.

use thiserror::Error;

/// The main error type for the pay estimator.
///
/// # Example
///
/// ```
/// use pay_estimator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table was parsed but is internally inconsistent.
    #[error("Invalid rate configuration: {message}")]
    InvalidRateConfig {
        /// A description of what made the table invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

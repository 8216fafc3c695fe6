//! Error types for the labour cost engine.
//!
//! The cost engine itself is infallible for validated input. These errors
//! cover the layers around it: rate configuration, input validation,
//! the profile store and report export.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the labour cost engine.
///
/// # Example
///
/// ```
/// use labour_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/jurisdiction.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/jurisdiction.yaml"
/// );
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

    /// No contribution rate set applies to the requested date.
    #[error("No contribution rates effective on {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A compensation input failed validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A named profile does not exist in the store.
    #[error("Profile not found: {name}")]
    ProfileNotFound {
        /// The profile name that was looked up.
        name: String,
    },

    /// The profile store could not be read or written.
    #[error("Profile store error at '{path}': {message}")]
    ProfileStore {
        /// The location of the backing store.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A cost report could not be rendered.
    #[error("Export error: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

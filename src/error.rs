//! Error types for the income aggregation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the fallible parts of the engine. Aggregation itself is a total
//! function and does not produce errors; these types cover configuration
//! loading and validation.

use thiserror::Error;

/// The main error type for the income aggregation engine.
///
/// # Example
///
/// ```
/// use income_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
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

    /// The configured hourly rate was not usable for earnings calculations.
    #[error("Invalid hourly rate {rate}: must be a positive, finite number")]
    InvalidHourlyRate {
        /// The rate that failed validation.
        rate: f64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

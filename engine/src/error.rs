//! Error taxonomy for the analysis engine
//!
//! `Validation` errors on pipeline inputs surface to the caller before any
//! stage runs. Everything else is caught at the stage boundary and replaced
//! with that stage's documented zero/empty default.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed input: out-of-range coordinates, inverted time span,
    /// efficiencies outside [0, 1], broken cut-in/rated/cut-out ordering
    #[error("Validation error: {0}")]
    Validation(String),

    /// The gateway returned nothing, failed, or timed out
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Internal numeric fault in a model
    #[error("Computation error: {0}")]
    Computation(String),

    /// Bad engine configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError::DataUnavailable(format!("gateway request failed: {err}"))
    }
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::Configuration(format!("failed to load configuration: {err}"))
    }
}

/// Result type alias for engine stages
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the person bridge.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain edge cases (zero height, empty contact fields) are never errors; only
//! violations of the boundary contract and bad configuration are.

use thiserror::Error;

/// Errors raised when a host hands the bridge something it cannot read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// An opaque handle was null
    #[error("Null handle passed for {0}")]
    NullHandle(&'static str),

    /// An accessor table entry was left unset
    #[error("Accessor table is missing {0}")]
    MissingAccessor(&'static str),

    /// Text crossing the boundary was not valid UTF-8
    #[error("Invalid text in {field}: {reason}")]
    InvalidText { field: &'static str, reason: String },

    /// Output pointer supplied by the caller was null
    #[error("Null output pointer for {0}")]
    NullOutput(&'static str),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A computation panicked and the panic was stopped at the boundary
    #[error("Panic at the bridge boundary: {0}")]
    Panic(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Logging was already initialised by someone else
    #[error("Logging already initialised: {0}")]
    Logging(String),
}

/// Convenience type alias for Results with BridgeError
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

//! Error types for the Pokedex CLI.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when constructing a [`TtlCache`](crate::cache::TtlCache).
///
/// Once built, the cache itself never fails: absence and staleness are both
/// reported as `None` from `get`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// TTL must be strictly positive
    #[error("Cache TTL must be greater than zero")]
    InvalidTtl,

    /// The background sweeper needs a Tokio runtime to run on
    #[error("Cache must be created from within a Tokio runtime")]
    NoRuntime,
}

/// Errors that can occur when talking to PokeAPI.
#[derive(Error, Debug)]
pub enum PokeApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CacheError
pub type CacheResult<T> = Result<T, CacheError>;

/// Convenience type alias for Results with PokeApiError
pub type PokeApiResult<T> = Result<T, PokeApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

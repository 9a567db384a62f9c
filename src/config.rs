//! Configuration management for the Pokedex CLI.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default PokeAPI base URL.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Configuration for the Pokedex CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI base URL
    pub api_url: String,

    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `POKEAPI_BASE_URL`: Base URL for PokeAPI (default: `https://pokeapi.co/api/v2`)
    /// - `CACHE_TTL_SECONDS`: Response cache TTL in seconds (default: 300)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which the REPL owns
        let _ = dotenvy::dotenv();

        let api_url =
            env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "POKEAPI_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let cache_ttl_seconds = Self::parse_env_u64("CACHE_TTL_SECONDS", 300)?;
        if cache_ttl_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CACHE_TTL_SECONDS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_url,
            cache_ttl_seconds,
            request_timeout,
            log_level,
        })
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl_seconds: 300,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

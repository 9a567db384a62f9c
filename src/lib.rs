//! Pokedex - an interactive PokeAPI explorer backed by a TTL response cache.
//!
//! # Architecture
//!
//! - **cache**: In-memory TTL cache with lazy eviction and a background sweeper
//! - **client**: Blocking HTTP client for PokeAPI plus an async wrapper
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: HTTP and cache counters
//! - **models**: Response models for location areas
//! - **repl**: Command parsing, handlers and the read-eval-print loop

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repl;

pub use cache::TtlCache;
pub use client::{AsyncPokeApiClient, AsyncPokeApiClientImpl, PokeApiClient};
pub use config::Config;
pub use error::{CacheError, ConfigError, PokeApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{LocationAreaDetail, LocationAreaList, NamedResource, PokemonEncounter};
pub use repl::{run_repl, Command, CommandOutcome, Pokedex};

//! Caching utilities for the Pokedex CLI.
//!
//! This module provides an in-memory response cache with a fixed TTL, lazy
//! eviction on read and a background sweeper that purges stale entries.

pub mod ttl_cache;

pub use ttl_cache::TtlCache;

//! Async wrapper around synchronous PokeApiClient.
//!
//! This module provides an async interface to the synchronous PokeApiClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::PokeApiClient;
use crate::error::{PokeApiError, PokeApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async client operations used by the REPL.
///
/// The trait is the seam tests use to substitute a canned client.
#[async_trait]
pub trait AsyncPokeApiClient: Send + Sync {
    /// Fetch the raw body at an absolute URL.
    async fn fetch(&self, url: &str) -> PokeApiResult<Vec<u8>>;

    /// URL of the first page of the location-area listing.
    fn location_areas_url(&self) -> String;

    /// URL of a single location area.
    fn location_area_url(&self, name: &str) -> String;
}

/// Async wrapper around synchronous PokeApiClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncPokeApiClientImpl {
    client: Arc<PokeApiClient>,
}

impl AsyncPokeApiClientImpl {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the wrapped blocking client.
    pub fn inner(&self) -> &PokeApiClient {
        &self.client
    }
}

#[async_trait]
impl AsyncPokeApiClient for AsyncPokeApiClientImpl {
    async fn fetch(&self, url: &str) -> PokeApiResult<Vec<u8>> {
        let client = self.client.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || client.fetch(&url))
            .await
            .map_err(|e| PokeApiError::HttpError(format!("Task join error: {}", e)))?
    }

    fn location_areas_url(&self) -> String {
        self.client.location_areas_url()
    }

    fn location_area_url(&self, name: &str) -> String {
        self.client.location_area_url(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let config = Config {
            api_url: "https://pokeapi.test".to_string(),
            ..Default::default()
        };
        let client = PokeApiClient::new(&config);
        let async_client = AsyncPokeApiClientImpl::new(client);

        assert_eq!(
            async_client.location_areas_url(),
            "https://pokeapi.test/location-area/"
        );

        // Should be able to clone
        let _cloned = async_client.clone();
    }
}

//! HTTP client for PokeAPI.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client returns raw response bodies so callers
//! can cache them byte-for-byte and decode them separately.

mod async_wrapper;
pub use async_wrapper::{AsyncPokeApiClient, AsyncPokeApiClientImpl};

use crate::config::Config;
use crate::error::{PokeApiError, PokeApiResult};
use crate::metrics::{HttpTimer, Metrics};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for PokeAPI.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PokeApiClient {
    /// Base URL for PokeAPI, without trailing slash
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl PokeApiClient {
    /// Create a new PokeApiClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a PokeApiClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// URL of the first page of the location-area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!(
            "{}/location-area/{}/",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// GET `url` and return the raw body.
    ///
    /// `url` is used as-is, since pagination links from the API are absolute.
    /// Only a 200 response counts as success.
    pub fn fetch(&self, url: &str) -> PokeApiResult<Vec<u8>> {
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
            .and_then(|response| Self::read_body(url, response));

        match &result {
            Ok(body) => {
                tracing::debug!("GET {} - {} bytes", url, body.len());
                timer.complete();
            }
            Err(e) => {
                tracing::warn!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    fn read_body(url: &str, response: ureq::Response) -> PokeApiResult<Vec<u8>> {
        let status = response.status();
        if status != 200 {
            return Err(PokeApiError::ApiError {
                status,
                message: format!("{} {} for {}", status, response.status_text(), url),
            });
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| PokeApiError::HttpError(e.to_string()))?;
        Ok(body)
    }

    /// Map a ureq error to a PokeApiError.
    fn map_error(&self, error: ureq::Error) -> PokeApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => PokeApiError::NotFound(message),
                    _ => PokeApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    PokeApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    PokeApiError::Timeout
                } else {
                    PokeApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = PokeApiClient::with_base_url("https://pokeapi.co/api/v2".to_string());
        assert_eq!(
            client.location_areas_url(),
            "https://pokeapi.co/api/v2/location-area/"
        );
        assert_eq!(
            client.location_area_url("canalave-city-area"),
            "https://pokeapi.co/api/v2/location-area/canalave-city-area/"
        );

        let client_with_slash = PokeApiClient::with_base_url("https://pokeapi.co/api/v2/".to_string());
        assert_eq!(
            client_with_slash.location_areas_url(),
            "https://pokeapi.co/api/v2/location-area/"
        );
    }

    #[test]
    fn test_area_name_is_encoded() {
        let client = PokeApiClient::with_base_url("https://pokeapi.co/api/v2".to_string());
        assert_eq!(
            client.location_area_url("route 1/../x"),
            "https://pokeapi.co/api/v2/location-area/route%201%2F..%2Fx/"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_url: "https://pokeapi.co/api/v2".to_string(),
            request_timeout: 5,
            ..Default::default()
        };

        let client = PokeApiClient::new(&config);
        assert_eq!(client.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(client.metrics().http_requests_total(), 0);
    }
}

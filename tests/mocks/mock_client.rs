use async_trait::async_trait;
use pokedex::client::AsyncPokeApiClient;
use pokedex::error::{PokeApiError, PokeApiResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

/// Mock PokeAPI client serving canned bodies by URL.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPokeApiClient {
    responses: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fetch_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockPokeApiClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            fetch_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_response(&self, url: &str, body: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), body.as_bytes().to_vec());
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        let counts = self.fetch_counts.lock().unwrap();
        *counts.get(url).unwrap_or(&0)
    }

    pub fn total_fetches(&self) -> usize {
        self.fetch_counts.lock().unwrap().values().sum()
    }

    fn track_fetch(&self, url: &str) {
        let mut counts = self.fetch_counts.lock().unwrap();
        *counts.entry(url.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockPokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncPokeApiClient for MockPokeApiClient {
    async fn fetch(&self, url: &str) -> PokeApiResult<Vec<u8>> {
        self.track_fetch(url);
        let responses = self.responses.lock().unwrap();
        responses
            .get(url)
            .cloned()
            .ok_or_else(|| PokeApiError::NotFound(url.to_string()))
    }

    fn location_areas_url(&self) -> String {
        format!("{}/location-area/", BASE_URL)
    }

    fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", BASE_URL, name)
    }
}

//! Command handlers for the Pokedex REPL.
//!
//! Each handler checks the response cache before going to the network and
//! stores fresh response bodies on the way back.

use super::Command;
use crate::cache::TtlCache;
use crate::client::AsyncPokeApiClient;
use crate::error::PokeApiResult;
use crate::metrics::Metrics;
use crate::models::{LocationAreaDetail, LocationAreaList};
use std::sync::Arc;

const HELP_TEXT: &str = "\
Available commands:
help    - Show this help message
exit    - Exit the program
map     - Show 20 location areas
mapb    - Go back 20 location areas
explore - Explore a specific location area (usage: explore <area_name>)
";

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// Text to show the user, newline terminated
    pub output: String,

    /// Whether the session should end
    pub exit: bool,
}

impl CommandOutcome {
    fn push_line(&mut self, line: impl AsRef<str>) {
        self.output.push_str(line.as_ref());
        self.output.push('\n');
    }
}

/// One interactive session: the API client, the shared response cache and
/// the listing pagination cursor.
pub struct Pokedex {
    client: Arc<dyn AsyncPokeApiClient>,
    cache: TtlCache,
    metrics: Metrics,
    next_url: Option<String>,
    prev_url: Option<String>,
}

impl Pokedex {
    pub fn new(client: Arc<dyn AsyncPokeApiClient>, cache: TtlCache) -> Self {
        Self {
            client,
            cache,
            metrics: Metrics::new(),
            next_url: None,
            prev_url: None,
        }
    }

    /// Cache hit/miss counters for this session.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// URL the next `map` will request, if a page has been shown.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// URL the next `mapb` will request, if any.
    pub fn prev_url(&self) -> Option<&str> {
        self.prev_url.as_deref()
    }

    /// Execute a parsed command.
    pub async fn execute(&mut self, command: Command) -> CommandOutcome {
        let mut outcome = CommandOutcome::default();

        match command {
            Command::Empty => {}
            Command::Help => outcome.output.push_str(HELP_TEXT),
            Command::Exit => {
                outcome.push_line("Exiting...");
                outcome.exit = true;
            }
            Command::Map => self.handle_map(false, &mut outcome).await,
            Command::MapBack => self.handle_map(true, &mut outcome).await,
            Command::Explore(None) => outcome.push_line("Usage: explore <location_area>"),
            Command::Explore(Some(area)) => self.handle_explore(&area, &mut outcome).await,
            Command::Unknown(word) => {
                tracing::debug!("Unknown command: {}", word);
                outcome.push_line(
                    "Unknown command. Type 'help' for the list of available commands.",
                );
            }
        }

        outcome
    }

    async fn handle_map(&mut self, back: bool, outcome: &mut CommandOutcome) {
        let url = if back {
            match &self.prev_url {
                Some(url) => url.clone(),
                None => {
                    outcome.push_line("No previous location areas available.");
                    return;
                }
            }
        } else {
            // Past the last page the cursor is empty again, so `map` wraps to the start
            self.next_url
                .clone()
                .unwrap_or_else(|| self.client.location_areas_url())
        };

        let (body, cached) = match self.fetch_cached(&url, &url).await {
            Ok(result) => result,
            Err(e) => {
                outcome.push_line(format!("Error fetching location areas: {}", e));
                return;
            }
        };

        if cached {
            outcome.push_line("Cached data found:");
        }

        match LocationAreaList::from_slice(&body) {
            Ok(page) => {
                outcome.push_line("Location areas:");
                for name in page.names() {
                    outcome.push_line(name);
                }
                self.next_url = page.next;
                self.prev_url = page.previous;
            }
            Err(e) => outcome.push_line(format!("Error parsing JSON: {}", e)),
        }
    }

    async fn handle_explore(&mut self, area: &str, outcome: &mut CommandOutcome) {
        let url = self.client.location_area_url(area);

        let cached = self.cache.get(area);
        let body = match cached {
            Some(body) => {
                self.metrics.record_cache_hit();
                outcome.push_line("Cached data found:");
                body
            }
            None => {
                self.metrics.record_cache_miss();
                outcome.push_line(format!("Fetching from URL: {}", url));
                match self.client.fetch(&url).await {
                    Ok(body) => {
                        self.cache.add(area, body.clone());
                        body
                    }
                    Err(e) => {
                        outcome.push_line(format!("Error fetching location area data: {}", e));
                        return;
                    }
                }
            }
        };

        match LocationAreaDetail::from_slice(&body) {
            Ok(detail) => {
                outcome.push_line("Pokémon found in this area:");
                for name in detail.pokemon_names() {
                    outcome.push_line(name);
                }
            }
            Err(e) => outcome.push_line(format!("Error parsing JSON: {}", e)),
        }
    }

    /// Look `key` up in the cache, fetching `url` and caching the body on a miss.
    ///
    /// Returns the body and whether it came from the cache.
    async fn fetch_cached(&self, key: &str, url: &str) -> PokeApiResult<(Vec<u8>, bool)> {
        if let Some(body) = self.cache.get(key) {
            tracing::debug!("Cache hit: {}", key);
            self.metrics.record_cache_hit();
            return Ok((body, true));
        }

        tracing::debug!("Cache miss: {}", key);
        self.metrics.record_cache_miss();
        let body = self.client.fetch(url).await?;
        self.cache.add(key, body.clone());
        Ok((body, false))
    }
}

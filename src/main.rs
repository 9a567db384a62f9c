//! Pokedex CLI - Main entry point
//!
//! Starts an interactive prompt on stdin/stdout for browsing PokeAPI location
//! areas. Responses are cached in memory for the configured TTL.

use anyhow::Result;
use pokedex::{
    run_repl, AsyncPokeApiClient, AsyncPokeApiClientImpl, Config, PokeApiClient, Pokedex,
    TtlCache,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout belongs to the REPL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Pokedex with API URL: {}", config.api_url);

    let cache = TtlCache::new(config.cache_ttl())?;
    info!("Cache TTL: {} seconds", config.cache_ttl_seconds);

    let sync_client = PokeApiClient::new(&config);
    let http_metrics = sync_client.metrics().clone();
    let client =
        Arc::new(AsyncPokeApiClientImpl::new(sync_client)) as Arc<dyn AsyncPokeApiClient>;

    let mut pokedex = Pokedex::new(client, cache.clone());

    let result = run_repl(
        &mut pokedex,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await;

    cache.stop();

    let http = http_metrics.summary();
    let session = pokedex.metrics().summary();
    info!(
        "HTTP requests: {} ({} errors, avg {:.1} ms); cache hits: {}, misses: {}",
        http.http_requests_total,
        http.http_errors_total,
        http.http_duration_avg_ms,
        session.cache_hits_total,
        session.cache_misses_total
    );

    if let Err(e) = result {
        error!("REPL terminated with I/O error: {}", e);
        return Err(e.into());
    }

    info!("Pokedex shutdown complete");
    Ok(())
}

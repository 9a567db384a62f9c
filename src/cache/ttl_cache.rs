//! Time-based response cache with TTL (Time To Live) support.
//!
//! Entries are opaque byte buffers keyed by string. An entry older than the
//! TTL is never handed out: `get` removes it on sight, and a background task
//! sweeps the whole map once per TTL interval so unread entries do not linger.

use crate::error::{CacheError, CacheResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

/// A cached payload with its insertion timestamp.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    created_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}

/// State shared between cache handles and the sweeper task.
struct Shared {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // The map is always left consistent, so a panic elsewhere while holding
        // the lock does not invalidate it.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove every expired entry, returning how many were dropped.
    fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        before - entries.len()
    }
}

/// A thread-safe response cache with time-based expiration.
///
/// All reads, writes and sweeps go through a single mutex, so an overwrite is
/// never observed half-done and a lazy eviction never races with the sweeper.
/// The cache is cheap to clone; clones share entries and the sweeper.
///
/// The sweeper runs on the Tokio runtime the cache was created in. It stops
/// when [`TtlCache::stop`] is called or when the last handle is dropped.
///
/// ```ignore
/// let cache = TtlCache::new(Duration::from_secs(300))?;
/// cache.add("https://pokeapi.co/api/v2/location-area/", body);
/// if let Some(bytes) = cache.get("https://pokeapi.co/api/v2/location-area/") {
///     // served from cache
/// }
/// cache.stop();
/// ```
#[derive(Clone)]
pub struct TtlCache {
    shared: Arc<Shared>,
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl TtlCache {
    /// Create a cache whose entries live for `ttl` and start its sweeper.
    ///
    /// # Errors
    /// - [`CacheError::InvalidTtl`] if `ttl` is zero
    /// - [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> CacheResult<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl);
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let shared = Arc::new(Shared {
            entries: Mutex::new(HashMap::new()),
            ttl,
        });
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        spawn_sweeper(&runtime, shared.clone(), shutdown_rx);
        tracing::debug!("Cache created with TTL {:?}", ttl);

        Ok(Self {
            shared,
            shutdown_tx: Arc::new(shutdown_tx),
        })
    }

    /// Insert a value, replacing any existing entry and resetting its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let entry = CacheEntry {
            value: value.into(),
            created_at: Instant::now(),
        };
        self.shared.lock().insert(key.into(), entry);
    }

    /// Get a value if it exists and is no older than the TTL.
    ///
    /// An expired entry is removed as part of the same lookup, so it is
    /// gone for every later caller as well.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let now = Instant::now();
        let mut entries = self.shared.lock();

        let expired = entries.get(key)?.is_expired(now, self.shared.ttl);
        if expired {
            entries.remove(key);
            tracing::debug!("Evicted stale cache entry: {}", key);
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Stop the background sweeper.
    ///
    /// The sweeper notices at its next wake-up; a sweep already running is
    /// allowed to finish. Expired entries left behind are still evicted
    /// lazily by `get`. Calling this more than once has no further effect.
    pub fn stop(&self) {
        let was_stopped = self.shutdown_tx.send_replace(true);
        if !was_stopped {
            tracing::debug!("Cache sweeper stop requested");
        }
    }

    /// Whether [`TtlCache::stop`] has been called.
    pub fn is_stopped(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Get the TTL duration for this cache.
    pub fn ttl(&self) -> Duration {
        self.shared.ttl
    }

    /// Get the number of entries in the cache (including expired ones not yet evicted).
    pub fn len(&self) -> usize {
        self.shared.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("ttl", &self.shared.ttl)
            .field("entries", &self.len())
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

/// Spawn the periodic sweep task.
///
/// Runs one sweep per TTL interval until a stop is signalled or every
/// sender handle is gone.
fn spawn_sweeper(runtime: &Handle, shared: Arc<Shared>, mut shutdown_rx: watch::Receiver<bool>) {
    runtime.spawn(async move {
        let mut interval = tokio::time::interval(shared.ttl);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await; // skip first immediate tick

        loop {
            tokio::select! {
                biased;

                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    let removed = shared.sweep();
                    if removed > 0 {
                        tracing::debug!("Cache sweep removed {} expired entries", removed);
                    }
                }
            }
        }

        tracing::debug!("Cache sweeper stopped");
    });
}

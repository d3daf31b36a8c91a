//! File Cache
//!
//! Durable cache variant. The working mapping is loaded from a [`Store`]
//! snapshot at construction, mutated purely in memory, and written back
//! wholesale exactly once, when the owner calls [`FileCache::close`].
//!
//! Flushing once at teardown rather than per mutation avoids an I/O round
//! trip on every `set`; the cost is that mutations made after the last
//! `close` are lost on abnormal termination.

use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::cache::{Cache, CacheEntry};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::store::Store;

// == File Cache ==
/// Key-value cache with TTL expiration, persisted through a durable store.
///
/// The snapshot format is a pretty-printed JSON object mapping each key to
/// its `{value, ttl, created_at}` record, so `V` must round-trip through
/// serde. Expiry semantics are identical to [`MemoryCache`]; the only
/// difference is the persistence boundary.
///
/// Teardown is explicit: call [`FileCache::close`] at the end of the owning
/// scope. Dropping the cache without closing it discards all mutations made
/// since construction and logs a warning.
///
/// If several instances point at the same store location, the last one to
/// close wins and overwrites whatever earlier instances wrote. No locking or
/// merging is attempted.
///
/// [`MemoryCache`]: crate::cache::MemoryCache
#[derive(Debug)]
pub struct FileCache<V, S: Store, C: Clock = SystemClock> {
    /// Key-value working mapping
    entries: HashMap<String, CacheEntry<V>>,
    /// Durable snapshot storage
    store: S,
    /// Time source for TTL arithmetic
    clock: C,
    /// Set once `close` has flushed, to silence the drop warning
    closed: bool,
}

impl<V, S> FileCache<V, S>
where
    V: Clone + Serialize + DeserializeOwned,
    S: Store,
{
    // == Constructor ==
    /// Opens a cache over `store`, backed by the system wall clock.
    ///
    /// # Errors
    /// Fails if the store exists but cannot be read, or holds content that is
    /// not a valid cache snapshot. Malformed content is never silently
    /// replaced with an empty cache.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_clock(store, SystemClock)
    }
}

impl<V, S, C> FileCache<V, S, C>
where
    V: Clone + Serialize + DeserializeOwned,
    S: Store,
    C: Clock,
{
    /// Opens a cache over `store` using the supplied clock.
    ///
    /// A missing or blank store yields an empty cache.
    ///
    /// # Errors
    /// Same failure modes as [`FileCache::open`].
    pub fn open_with_clock(store: S, clock: C) -> Result<Self> {
        let entries = if store.exists() {
            let raw = store.read()?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            HashMap::new()
        };

        debug!(entries = entries.len(), "loaded cache snapshot");

        Ok(Self {
            entries,
            store,
            clock,
            closed: false,
        })
    }

    // == Close ==
    /// Flushes the working mapping to the store and consumes the cache.
    ///
    /// The entire mapping is written, including entries that are logically
    /// expired but not yet lazily evicted. Overwrites any prior store
    /// content.
    ///
    /// # Errors
    /// Fails if the store cannot complete the write. The snapshot is not
    /// retried; the previous store content remains visible.
    pub fn close(mut self) -> Result<()> {
        let result = self.flush();
        self.closed = true;
        result
    }

    fn flush(&self) -> Result<()> {
        // Keys are written in sorted order, so equal mappings produce
        // byte-identical snapshots.
        let snapshot: BTreeMap<&String, &CacheEntry<V>> = self.entries.iter().collect();
        let data = serde_json::to_string_pretty(&snapshot)?;

        self.store.write(&data)?;
        debug!(entries = self.entries.len(), "flushed cache snapshot");
        Ok(())
    }
}

impl<V, S, C> Cache<V> for FileCache<V, S, C>
where
    V: Clone + Serialize + DeserializeOwned,
    S: Store,
    C: Clock,
{
    fn set(&mut self, key: &str, value: V, ttl: u64) {
        let entry = CacheEntry::new(value, ttl, self.clock.now());
        self.entries.insert(key.to_string(), entry);
    }

    fn get(&mut self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;

        if entry.is_expired(self.clock.now()) {
            trace!(key, "evicting expired entry");
            self.entries.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<V, S: Store, C: Clock> Drop for FileCache<V, S, C> {
    fn drop(&mut self) {
        // No flush here: a Drop impl cannot report a storage failure, and a
        // silent best-effort write would make durability unobservable.
        if !self.closed {
            warn!(
                entries = self.entries.len(),
                "file cache dropped without close(); mutations were not flushed"
            );
        }
    }
}

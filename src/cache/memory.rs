//! Memory Cache
//!
//! In-process cache variant. Entries live only for the lifetime of the
//! instance; dropping it discards everything.

use std::collections::HashMap;

use tracing::trace;

use crate::cache::{Cache, CacheEntry};
use crate::clock::{Clock, SystemClock};

// == Memory Cache ==
/// Transient key-value cache with TTL expiration.
///
/// The clock is injectable so expiry behaviour is deterministic under test;
/// [`MemoryCache::new`] defaults to the wall clock.
#[derive(Debug)]
pub struct MemoryCache<V, C: Clock = SystemClock> {
    /// Key-value working mapping
    entries: HashMap<String, CacheEntry<V>>,
    /// Time source for TTL arithmetic
    clock: C,
}

impl<V: Clone> MemoryCache<V> {
    // == Constructor ==
    /// Creates an empty cache backed by the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V: Clone> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: Clock> MemoryCache<V, C> {
    /// Creates an empty cache using the supplied clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }
}

impl<V: Clone, C: Clock> Cache<V> for MemoryCache<V, C> {
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

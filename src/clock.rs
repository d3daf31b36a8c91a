//! Clock Module
//!
//! Injectable time source for TTL arithmetic.
//!
//! All expiry math runs on whole Unix seconds. Both cache variants take the
//! clock as a constructor parameter so tests can substitute a controllable
//! reading instead of sleeping in real time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

// == Clock Trait ==
/// Supplies the current instant as a Unix timestamp in seconds.
pub trait Clock {
    /// Returns the current Unix timestamp in whole seconds.
    fn now(&self) -> u64;
}

// == System Clock ==
/// Wall-clock implementation, used when no clock is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Negative timestamps only occur pre-1970.
        Utc::now().timestamp().max(0) as u64
    }
}

// == Manual Clock ==
/// Controllable clock for deterministic tests.
///
/// Clones share the same reading, so a test can hold one handle while the
/// cache under test holds another:
///
/// ```
/// use simple_cache::{Cache, ManualClock, MemoryCache};
///
/// let clock = ManualClock::new(100);
/// let mut cache = MemoryCache::with_clock(clock.clone());
/// cache.set("a", "1", 5);
/// clock.set(106);
/// assert_eq!(cache.get("a"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a manual clock at the given Unix timestamp.
    pub fn new(now: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now)),
        }
    }

    /// Sets the clock to an absolute timestamp.
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::Relaxed);
    }

    /// Moves the clock forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::Relaxed);
    }

    /// Moves the clock backward by `secs`, saturating at zero.
    pub fn rewind(&self, secs: u64) {
        let current = self.now.load(Ordering::Relaxed);
        self.now.store(current.saturating_sub(secs), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}

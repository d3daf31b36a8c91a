//! Cache Module
//!
//! Key-value caching with TTL expiration, in two variants sharing one
//! contract: [`MemoryCache`] lives entirely in process memory, [`FileCache`]
//! loads a snapshot from a durable store at construction and flushes it back
//! at teardown.
//!
//! Expiry is lazy: an expired entry is removed when it is next read, not by a
//! background sweeper.

mod entry;
mod file;
mod memory;


// Re-export public types
pub use entry::CacheEntry;
pub use file::FileCache;
pub use memory::MemoryCache;

// == Cache Trait ==
/// The contract shared by both cache variants.
///
/// `V` is the stored value type. The contract itself is value-type-agnostic;
/// individual implementations add the bounds they need (`Clone` everywhere,
/// plus serde bounds for the file-backed variant).
pub trait Cache<V> {
    /// Stores `value` under `key` with a TTL in seconds.
    ///
    /// A TTL of `0` means the entry never expires. Overwrites any existing
    /// entry for `key` in full: value, TTL and creation timestamp all reset.
    /// Always succeeds. Negative TTLs are unrepresentable by construction.
    fn set(&mut self, key: &str, value: V, ttl: u64);

    /// Retrieves the value under `key`, or `None` if absent or expired.
    ///
    /// Reading an expired entry removes it from the working mapping as a side
    /// effect, so `get` takes `&mut self`. The return value is pure with
    /// respect to a fixed clock reading.
    fn get(&mut self, key: &str) -> Option<V>;

    /// Retrieves the value under `key`, or `default` if absent or expired.
    fn get_or(&mut self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    /// Removes the entry under `key`. No-op if absent; never errors.
    fn delete(&mut self, key: &str);

    /// Removes all entries. Never errors.
    fn clear(&mut self);

    /// Returns the number of held entries.
    ///
    /// Counts expired entries that have not yet been lazily evicted.
    fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

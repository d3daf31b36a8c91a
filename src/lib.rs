//! Simple Cache - key-value caching with TTL expiry
//!
//! Two cache variants share one contract: [`MemoryCache`] holds entries for
//! the life of the instance, [`FileCache`] persists its working set through a
//! durable [`Store`] (loaded at construction, flushed once at [`FileCache::close`]).
//!
//! # Example
//!
//! ```no_run
//! use simple_cache::{Cache, FileCache, Result, TextFile};
//!
//! fn main() -> Result<()> {
//!     let mut cache = FileCache::open(TextFile::new("tokens.json"))?;
//!     cache.set("api_token", "abc123".to_string(), 3600);
//!     let token = cache.get_or("api_token", String::new());
//!     cache.close()
//! }
//! ```

pub mod cache;
pub mod clock;
pub mod error;
pub mod store;

pub use cache::{Cache, CacheEntry, FileCache, MemoryCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CacheError, Result};
pub use store::{Store, TextFile};

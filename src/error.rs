//! Error types for the cache crate
//!
//! Provides unified error handling using thiserror.

use std::io;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and teardown.
///
/// The cache performs no retries and no backoff: every failure is a terminal
/// signal to its direct caller, which decides whether to log and continue or
/// abort.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The durable store could not be read or written
    #[error("storage failure at '{path}': {source}")]
    Storage {
        /// Location of the backing medium, as reported by the store
        path: String,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// The durable store holds content that is not valid serialized cache data
    #[error("corrupt cache snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

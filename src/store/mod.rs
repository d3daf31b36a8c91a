//! Durable Store Module
//!
//! Storage abstraction consumed by the file-backed cache: raw read/write of
//! one serialized snapshot. The cache never manages the medium's own
//! lifecycle (creation path, permissions); it only reads and writes through
//! this interface.

mod text_file;

pub use text_file::TextFile;

use crate::error::Result;

// == Store Trait ==
/// Raw persistent storage for a single serialized snapshot.
pub trait Store {
    /// Reports whether the medium currently holds content.
    fn exists(&self) -> bool;

    /// Reads the full stored content.
    ///
    /// # Errors
    /// Returns a storage error if the medium is missing or unreadable.
    fn read(&self) -> Result<String>;

    /// Replaces the stored content with `data`.
    ///
    /// Must be atomic from the caller's perspective: either the new content
    /// is fully durable or the previous content is unchanged. A truncated
    /// write must never become visible.
    ///
    /// # Errors
    /// Returns a storage error if the write cannot be completed.
    fn write(&self, data: &str) -> Result<()>;
}

//! Data models for exported chat archives.
//!
//! - [`Archive`] - One channel export (or one chunk of it) as read from and written to disk
//! - [`IndexRecord`] - Per-file summary produced by the indexer
//! - [`ArchiveIndex`] - Insertion-ordered map of file name to [`IndexRecord`]
//!
//! Guild, channel and message payloads are opaque `serde_json::Value`s; only the message `id`
//! field is ever inspected.

pub mod archive;
pub mod index;

pub use archive::Archive;
pub use index::{ArchiveIndex, IndexRecord};

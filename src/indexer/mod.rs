//! Index building for archive export directories
//!
//! # Error Handling Strategy
//!
//! The indexer has no per-file error isolation:
//!
//! - **Naming gate**: a file whose stem does not match the archive naming convention aborts the
//!   run with the offending name. Files are never skipped.
//!
//! - **Content errors**: unreadable files, invalid JSON, empty message lists and messages
//!   without an `id` abort the run.
//!
//! - **All or nothing output**: the index is only written after every file has been processed,
//!   so a failed run prints nothing to stdout.

pub mod builder;
pub mod output;

pub use builder::{index_archive, index_directory};
pub use output::write_index;

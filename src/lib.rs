//! Archive Tools - Split and index exported chat archives
//!
//! Works on channel exports stored as one JSON document per file (`guild`, `channel`,
//! `messages`, `messageCount`), named `<guild> - <category> - <channel> [<channel_id>]` with an
//! optional ` [part <n>]` suffix. It provides:
//!
//! - Splitting archive files over a size threshold into smaller chunk files
//! - Building an ordered index of every archive (guild, channel, first and last message id)
//! - Parsing and producing archive file names
//!
//! # Example
//!
//! ```no_run
//! use archive_tools::{index_directory, write_index};
//! use std::path::Path;
//!
//! let index = index_directory(Path::new("out"))?;
//! write_index(&index, std::io::stdout().lock())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod naming;
pub mod splitter;
pub mod utils;

// Re-export commonly used types
pub use indexer::{index_archive, index_directory, write_index};
pub use models::{Archive, ArchiveIndex, IndexRecord};
pub use naming::{ArchiveName, chunk_file_name};
pub use splitter::{ChunkPlan, SplitOptions, SplitSummary, split_archive, split_directory};
pub use utils::list_archive_files;

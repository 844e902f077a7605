pub mod environment;
pub mod files;
pub mod logging;

pub use environment::{get_tool_dir, tool_relative_dir};
pub use files::{file_name_string, list_archive_files};
pub use logging::{init_logging, progress_bar};

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory containing the running executable
///
/// Default source and output directories are resolved against this, so the tools behave the same
/// regardless of the working directory they are launched from.
pub fn get_tool_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    tool_dir_of(&exe)
}

/// `name` resolved against the tool directory
pub fn tool_relative_dir(name: &str) -> Result<PathBuf> {
    Ok(get_tool_dir()?.join(name))
}

fn tool_dir_of(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable path has no parent directory: {}", exe.display()))
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

const ARCHIVE_EXTENSION: &str = "json";

/// List archive files directly under `dir`
///
/// Returns regular files with a `.json` extension, without recursing, in the order the
/// filesystem enumerates them. The order is deliberately left unsorted.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read or an entry cannot be accessed.
pub fn list_archive_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry
            .with_context(|| format!("Failed to read archive directory: {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == ARCHIVE_EXTENSION) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Final path component as an owned string
pub fn file_name_string(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Path has no file name: {}", path.display()))
}

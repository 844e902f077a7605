//! Index builder for archive export directories.
//!
//! Every `.json` file in the export directory must follow the archive naming convention and hold
//! at least one message. Either problem stops the run: an index with silently missing channels
//! is worse than no index, and nothing is printed until every file has been summarized.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::models::{ArchiveIndex, IndexRecord};
use crate::naming::ArchiveName;
use crate::utils::{file_name_string, list_archive_files, progress_bar};

/// The parts of an archive the index reads; everything else (including `messageCount`) is ignored
#[derive(Deserialize)]
struct ArchiveHead {
    guild: Value,
    channel: Value,
    messages: Vec<Value>,
}

/// Build the index document for every archive in `export_dir`
///
/// Entries are keyed by file name (with extension) and keep the order in which the filesystem
/// listed the files.
///
/// # Errors
///
/// Returns an error if:
/// - The export directory cannot be listed
/// - A file name does not match the archive naming convention (`Invalid filename: <stem>`)
/// - A file cannot be read or parsed, or has no messages
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use archive_tools::index_directory;
///
/// let index = index_directory(Path::new("out"))?;
/// println!("Indexed {} archives", index.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn index_directory(export_dir: &Path) -> Result<ArchiveIndex> {
    let files = list_archive_files(export_dir)?;
    let mut index = ArchiveIndex::new();

    let pb = progress_bar(files.len());
    for path in &files {
        let name = ArchiveName::from_path(path)?;
        debug!(
            guild = %name.guild,
            category = %name.category,
            channel = %name.channel,
            channel_id = %name.channel_id,
            part = name.part,
            "parsed archive name"
        );

        let record = index_archive(path)?;
        index.insert(file_name_string(path)?, record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(archives = index.len(), dir = %export_dir.display(), "index built");

    Ok(index)
}

/// Summarize one archive file: guild, channel, and the ids of its first and last messages
pub fn index_archive(path: &Path) -> Result<IndexRecord> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive file: {}", path.display()))?;
    let archive: ArchiveHead = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse archive file: {}", path.display()))?;

    if archive.messages.is_empty() {
        bail!("Archive has no messages: {}", path.display());
    }

    let first_message_id = archive
        .messages
        .first()
        .and_then(|m| m.get("id"))
        .cloned()
        .with_context(|| format!("First message has no id in {}", path.display()))?;
    let last_message_id = archive
        .messages
        .last()
        .and_then(|m| m.get("id"))
        .cloned()
        .with_context(|| format!("Last message has no id in {}", path.display()))?;

    Ok(IndexRecord {
        guild: archive.guild,
        channel: archive.channel,
        first_message_id,
        last_message_id,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_index_archive_extracts_ids() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("G - C - X [1].json");
        fs::write(
            &path,
            json!({
                "guild": {"id": "10", "name": "G"},
                "channel": {"id": "1", "name": "X"},
                "messages": [{"id": "5"}, {"id": "6"}, {"id": "7"}],
                "messageCount": 3
            })
            .to_string(),
        )
        .unwrap();

        let record = index_archive(&path).unwrap();
        assert_eq!(record.first_message_id, json!("5"));
        assert_eq!(record.last_message_id, json!("7"));
        assert_eq!(record.guild, json!({"id": "10", "name": "G"}));
        assert_eq!(record.channel, json!({"id": "1", "name": "X"}));
    }

    #[test]
    fn test_index_archive_single_message() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("one.json");
        fs::write(&path, r#"{"guild":null,"channel":null,"messages":[{"id":42}]}"#).unwrap();

        let record = index_archive(&path).unwrap();
        assert_eq!(record.first_message_id, json!(42));
        assert_eq!(record.last_message_id, json!(42));
    }

    #[test]
    fn test_index_archive_ignores_message_count() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (i, count) in ["\"1\"", "1.5", "-3", "null"].iter().enumerate() {
            let path = dir.path().join(format!("count-{}.json", i));
            fs::write(
                &path,
                format!(
                    r#"{{"guild":{{}},"channel":{{}},"messages":[{{"id":"1"}}],"messageCount":{}}}"#,
                    count
                ),
            )
            .unwrap();

            let record = index_archive(&path).unwrap();
            assert_eq!(record.first_message_id, json!("1"));
        }
    }

    #[test]
    fn test_index_archive_empty_messages_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("empty.json");
        fs::write(&path, r#"{"guild":{},"channel":{},"messages":[],"messageCount":0}"#).unwrap();

        let err = index_archive(&path).unwrap_err();
        assert!(err.to_string().contains("Archive has no messages"));
    }

    #[test]
    fn test_index_archive_message_without_id_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("noid.json");
        fs::write(&path, r#"{"guild":{},"channel":{},"messages":[{"content":"hi"}]}"#).unwrap();

        let err = index_archive(&path).unwrap_err();
        assert!(err.to_string().contains("has no id"));
    }

    #[test]
    fn test_index_archive_invalid_json_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = index_archive(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse archive file"));
    }
}

//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test export directories
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the export directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an archive file with the given name
    pub fn with_archive(self, file_name: &str, archive: &ArchiveBuilder) -> Self {
        archive.create_in(self.temp_dir.path(), file_name);
        self
    }

    /// Write a file with arbitrary content
    pub fn with_raw_file(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for archive documents
pub struct ArchiveBuilder {
    guild_name: String,
    channel_name: String,
    channel_id: String,
    message_count: usize,
    first_id: u64,
    content_len: usize,
    declared_count: Option<Option<usize>>,
}

impl ArchiveBuilder {
    /// Create an archive with 3 short messages
    pub fn new() -> Self {
        Self {
            guild_name: "Test Guild".to_string(),
            channel_name: "general".to_string(),
            channel_id: "12345".to_string(),
            message_count: 3,
            first_id: 1_000_000,
            content_len: 8,
            declared_count: None,
        }
    }

    /// Set the guild name
    pub fn guild(mut self, name: &str) -> Self {
        self.guild_name = name.to_string();
        self
    }

    /// Set the channel name and id
    pub fn channel(mut self, name: &str, id: &str) -> Self {
        self.channel_name = name.to_string();
        self.channel_id = id.to_string();
        self
    }

    /// Set the number of messages
    pub fn messages(mut self, count: usize) -> Self {
        self.message_count = count;
        self
    }

    /// Set the id of the first message; later messages count up from it
    pub fn first_id(mut self, id: u64) -> Self {
        self.first_id = id;
        self
    }

    /// Set the length of each message's content
    pub fn content_len(mut self, len: usize) -> Self {
        self.content_len = len;
        self
    }

    /// Choose enough ~1KB messages for the serialized file to come out close to `bytes`
    pub fn approx_size(self, bytes: usize) -> Self {
        let count = bytes / 1_040;
        self.content_len(1_000).messages(count)
    }

    /// Override the declared `messageCount` (`None` removes the field)
    pub fn declared_count(mut self, count: Option<usize>) -> Self {
        self.declared_count = Some(count);
        self
    }

    /// Message ids in order, as written
    pub fn message_ids(&self) -> Vec<String> {
        (0..self.message_count as u64).map(|i| (self.first_id + i).to_string()).collect()
    }

    /// Convert to a JSON document
    pub fn to_json(&self) -> Value {
        let content = "x".repeat(self.content_len);
        let messages: Vec<Value> = self
            .message_ids()
            .into_iter()
            .map(|id| json!({"id": id, "type": "Default", "content": content}))
            .collect();

        let mut doc = json!({
            "guild": {"id": "999", "name": self.guild_name, "iconUrl": "icon.png"},
            "channel": {
                "id": self.channel_id,
                "type": "GuildTextChat",
                "category": "Cat",
                "name": self.channel_name,
                "topic": null
            },
            "messages": messages,
            "messageCount": self.message_count
        });

        match self.declared_count {
            Some(Some(count)) => doc["messageCount"] = json!(count),
            Some(None) => {
                doc.as_object_mut().expect("archive is an object").remove("messageCount");
            }
            None => {}
        }

        doc
    }

    /// Write the archive into `dir` and return its path
    pub fn create_in(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let bytes = serde_json::to_vec(&self.to_json()).expect("Failed to serialize archive");
        fs::write(&path, bytes).expect("Failed to write archive file");
        path
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a JSON file from disk
pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read JSON file");
    serde_json::from_str(&text).expect("Failed to parse JSON file")
}

/// Sorted file names in a directory
pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Size of a file in bytes
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).expect("Failed to stat file").len()
}

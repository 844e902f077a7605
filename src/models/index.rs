use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Summary of one archive file in the index document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub guild: Value,
    pub channel: Value,
    pub first_message_id: Value,
    pub last_message_id: Value,
}

/// Index document: archive file name to summary, in the order files were processed
///
/// Serializes as a single JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveIndex {
    entries: Vec<(String, IndexRecord)>,
}

impl ArchiveIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, replacing any earlier record for the same file name in place
    pub fn insert(&mut self, file_name: String, record: IndexRecord) {
        match self.entries.iter_mut().find(|(name, _)| *name == file_name) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((file_name, record)),
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&IndexRecord> {
        self.entries.iter().find(|(name, _)| name == file_name).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }
}

impl Serialize for ArchiveIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

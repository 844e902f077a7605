use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One exported channel: guild and channel metadata plus its messages in chronological order
///
/// `guild`, `channel` and every message are kept as opaque JSON values so they pass through
/// unchanged. Field order matches the order chunk files are written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub guild: Value,
    pub channel: Value,
    pub messages: Vec<Value>,
    #[serde(rename = "messageCount", default, skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u64>,
}

impl Archive {
    /// Build a chunk document sharing this archive's guild and channel
    pub fn chunk(&self, messages: &[Value]) -> Archive {
        Archive {
            guild: self.guild.clone(),
            channel: self.channel.clone(),
            messages: messages.to_vec(),
            message_count: Some(messages.len() as u64),
        }
    }

    /// Whether the declared `messageCount` agrees with the message list
    pub fn count_matches(&self) -> bool {
        self.message_count == Some(self.messages.len() as u64)
    }
}

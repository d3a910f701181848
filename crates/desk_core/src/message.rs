//! Message - a single entry in a conversation transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    Customer,
    Ai,
    Human,
    System,
}

impl MessageSender {
    /// Get the sender as a simple string for display and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Ai => "ai",
            Self::Human => "human",
            Self::System => "system",
        }
    }
}

/// A transcript entry. Messages are append-only and chronological.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub id: Uuid,
    pub sender: MessageSender,
    pub sender_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh id and the current timestamp.
    pub fn new(
        sender: MessageSender,
        sender_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            sender_name: sender_name.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a synthetic system note, e.g. recording a handoff.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageSender::System, "System", content)
    }

    /// Check if this entry is a synthetic system note.
    pub fn is_system(&self) -> bool {
        self.sender == MessageSender::System
    }
}

//! Conversation - a customer chat thread with AI/human handoff state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::Message;

/// Lifecycle status of a conversation. Any status is reachable from any
/// other; closing a thread does not freeze it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Open,
    Pending,
    Closed,
}

impl ConversationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Closed => "closed",
        }
    }
}

/// Whether the automated agent or a human operator is driving the thread.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationMode {
    #[default]
    Ai,
    Human,
}

impl ConversationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Human => "human",
        }
    }
}

/// Triage priority assigned to a conversation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// A customer chat thread.
///
/// The transcript is append-only and chronological. The last-message
/// preview fields mirror the most recent chat message; synthetic system
/// notes are recorded in the transcript without touching the preview.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Conversation {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_avatar: Option<String>,
    #[serde(default)]
    pub status: ConversationStatus,
    #[serde(default)]
    pub mode: ConversationMode,
    /// Team member currently assigned to the thread, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<Uuid>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub labels: Vec<String>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty thread for a customer: open, AI-driven, unassigned.
    pub fn new(customer_name: impl Into<String>, customer_phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_avatar: None,
            status: ConversationStatus::Open,
            mode: ConversationMode::Ai,
            assigned_agent: None,
            priority: Priority::Medium,
            labels: Vec::new(),
            last_message: String::new(),
            last_message_at: Utc::now(),
            unread_count: 0,
            messages: Vec::new(),
        }
    }

    /// Append a chat message and mirror it into the preview fields.
    pub fn record_message(&mut self, message: Message) {
        self.last_message = message.content.clone();
        self.last_message_at = message.timestamp;
        self.messages.push(message);
    }

    /// Append a synthetic system note. The preview fields are left alone:
    /// notes log transitions, they are not part of the exchange.
    pub fn push_system_note(&mut self, note: impl Into<String>) {
        self.messages.push(Message::system(note));
    }

    /// The most recent transcript entry, if any.
    pub fn last_entry(&self) -> Option<&Message> {
        self.messages.last()
    }
}

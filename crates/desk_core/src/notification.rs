//! Notification - read-tracked alerts surfaced to operators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a notification is about.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Order,
    Chat,
    Stock,
    System,
}

/// An alert with a read flag. Marking read is one-way.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            body: body.into(),
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Mark the notification read. Returns true if it was unread.
    pub fn mark_read(&mut self) -> bool {
        let newly_read = !self.read;
        self.read = true;
        newly_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut notification =
            Notification::new(NotificationKind::Order, "New order", "Order #1042 placed");
        assert!(!notification.read);

        assert!(notification.mark_read());
        assert!(notification.read);

        // Second call keeps it read and reports no change.
        assert!(!notification.mark_read());
        assert!(notification.read);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_value(NotificationKind::Stock).unwrap(), "stock");
    }
}

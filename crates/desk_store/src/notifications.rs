//! Notification mutators - read marking, single and bulk

use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::store::DeskStore;

impl DeskStore {
    /// Mark one notification read. Idempotent: marking an already-read
    /// notification succeeds and changes nothing.
    pub fn mark_notification_read(&mut self, id: Uuid) -> Result<()> {
        let notification = self
            .notification_mut(id)
            .ok_or(StoreError::NotificationNotFound(id))?;

        let newly_read = notification.mark_read();

        tracing::debug!(
            notification_id = %id,
            newly_read = newly_read,
            "DeskStore: Notification marked read"
        );

        Ok(())
    }

    /// Mark every notification read. Returns how many were newly
    /// marked.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut marked = 0;
        for notification in &mut self.notifications {
            if notification.mark_read() {
                marked += 1;
            }
        }

        tracing::debug!(marked = marked, "DeskStore: All notifications marked read");

        marked
    }
}

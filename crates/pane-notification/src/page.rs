//! Notification feed as a screen page

use pane_tabs::Page;

use crate::adapter::{NotificationAdapter, NotificationClickListener};
use crate::notification::Notifications;

pub struct NotificationPage {
    id: String,
    adapter: NotificationAdapter,
}

impl NotificationPage {
    pub const DEFAULT_ID: &'static str = "notifications";

    pub fn new(feed: Notifications, listener: Box<dyn NotificationClickListener>) -> Self {
        Self::with_id(Self::DEFAULT_ID, feed, listener)
    }

    pub fn with_id(
        id: impl Into<String>,
        feed: Notifications,
        listener: Box<dyn NotificationClickListener>,
    ) -> Self {
        Self {
            id: id.into(),
            adapter: NotificationAdapter::new(feed.notifications, listener),
        }
    }

    pub fn adapter(&self) -> &NotificationAdapter {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut NotificationAdapter {
        &mut self.adapter
    }
}

impl Page for NotificationPage {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_shown(&mut self) {
        tracing::debug!(
            page = %self.id,
            count = self.adapter.item_count(),
            "Notification feed shown"
        );
    }
}

impl std::fmt::Debug for NotificationPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationPage")
            .field("id", &self.id)
            .field("adapter", &self.adapter)
            .finish()
    }
}

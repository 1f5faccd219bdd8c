//! Notification list adapter
//!
//! Maps notifications to rows. Rows start collapsed; toggling a row flips
//! between the preview and the full content. Replacing the list collapses
//! everything and bumps the revision so the whole list gets redrawn.

use crate::error::NotificationError;
use crate::html::html_to_text;
use crate::notification::Notification;
use crate::Result;

/// Receives clicks on a row's action areas
pub trait NotificationClickListener {
    fn on_click(&mut self, position: usize);

    fn on_menu(&mut self, position: usize);
}

/// Clickable parts of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Button,
    Menu,
}

/// Everything a renderer needs to draw one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub id: String,
    pub title: String,
    pub sub_title: String,
    /// Content as plain text
    pub content: String,
    pub date: String,
    pub content_preview: String,
    pub image: Option<Vec<u8>>,
    pub expanded: bool,
}

pub struct NotificationAdapter {
    notifications: Vec<Notification>,
    expanded: Vec<bool>,
    listener: Box<dyn NotificationClickListener>,
    revision: u64,
}

impl NotificationAdapter {
    pub fn new(
        notifications: Vec<Notification>,
        listener: Box<dyn NotificationClickListener>,
    ) -> Self {
        let expanded = vec![false; notifications.len()];
        Self {
            notifications,
            expanded,
            listener,
            revision: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.notifications.len()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Incremented every time the whole list is replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Build the row for `position`
    pub fn bind(&self, position: usize) -> Result<NotificationRow> {
        let notification = self.get(position)?;

        Ok(NotificationRow {
            id: notification.id.clone(),
            title: notification.title.clone(),
            sub_title: notification.sub_title.clone(),
            content: html_to_text(&notification.content),
            date: notification.formatted_date(),
            content_preview: notification.preview(),
            image: notification.image.clone(),
            expanded: self.expanded[position],
        })
    }

    /// Flip a row between collapsed and expanded. Returns the new state.
    pub fn toggle_expanded(&mut self, position: usize) -> Result<bool> {
        self.check_index(position)?;

        let expanded = !self.expanded[position];
        self.expanded[position] = expanded;

        tracing::trace!(position, expanded, "Notification row toggled");

        Ok(expanded)
    }

    pub fn is_expanded(&self, position: usize) -> bool {
        self.expanded.get(position).copied().unwrap_or(false)
    }

    /// Forward a click on a row to the listener
    pub fn click(&mut self, position: usize, target: RowTarget) -> Result<()> {
        self.check_index(position)?;

        match target {
            RowTarget::Button => self.listener.on_click(position),
            RowTarget::Menu => self.listener.on_menu(position),
        }

        Ok(())
    }

    /// Replace the whole list
    pub fn set_filter(&mut self, notifications: Vec<Notification>) {
        self.expanded = vec![false; notifications.len()];
        self.notifications = notifications;
        self.revision += 1;

        tracing::debug!(
            count = self.notifications.len(),
            revision = self.revision,
            "Notification list replaced"
        );
    }

    fn get(&self, position: usize) -> Result<&Notification> {
        self.notifications
            .get(position)
            .ok_or(NotificationError::IndexOutOfBounds {
                index: position,
                count: self.notifications.len(),
            })
    }

    fn check_index(&self, position: usize) -> Result<()> {
        self.get(position).map(|_| ())
    }
}

impl std::fmt::Debug for NotificationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationAdapter")
            .field("item_count", &self.notifications.len())
            .field("expanded", &self.expanded)
            .field("revision", &self.revision)
            .finish()
    }
}

//! Pane Notifications
//!
//! Presentation of a notification feed: records are mapped to rows, each row
//! can be expanded to show the full content, and the whole list can be
//! swapped at once.

mod adapter;
mod error;
mod html;
mod notification;
mod page;

pub use adapter::{NotificationAdapter, NotificationClickListener, NotificationRow, RowTarget};
pub use error::NotificationError;
pub use html::html_to_text;
pub use notification::{Notification, Notifications, DATE_FORMAT};
pub use page::NotificationPage;

pub type Result<T> = std::result::Result<T, NotificationError>;

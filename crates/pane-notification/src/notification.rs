//! Notification records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

/// Display format of a notification date (`dd-M-yyyy hh:mm:ss`, 12-hour clock)
pub const DATE_FORMAT: &str = "%d-%-m-%Y %I:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub sub_title: String,
    /// Body, as HTML
    pub content: String,
    pub date: DateTime<Utc>,
    /// Encoded picture, if the notification carried one
    #[serde(default)]
    pub image: Option<Vec<u8>>,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        sub_title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            sub_title: sub_title.into(),
            content: content.into(),
            date: Utc::now(),
            image: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Collapsed stand-in for the content
    pub fn preview(&self) -> String {
        format!("{} ...", self.sub_title)
    }
}

/// Feed handed to a notification page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    pub notifications: Vec<Notification>,
}

impl Notifications {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

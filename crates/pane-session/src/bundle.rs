//! Saved-state bundle
//!
//! The string map a host hands to a screen when it is saved and gives back
//! when the screen is recreated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SessionError;
use crate::session::Session;
use crate::Result;

/// Key the session is stored under
pub const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState {
    values: BTreeMap<String, String>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode the session stored under [`SESSION_KEY`]
    pub fn read_session(&self) -> Result<Session> {
        let json = self
            .get_string(SESSION_KEY)
            .ok_or_else(|| SessionError::MissingEntry(SESSION_KEY.to_string()))?;
        Session::from_json(json)
    }

    /// Encode the session under [`SESSION_KEY`], replacing any previous entry
    pub fn write_session(&mut self, session: &Session) -> Result<()> {
        let json = session.to_json()?;
        self.put_string(SESSION_KEY, json);
        Ok(())
    }
}

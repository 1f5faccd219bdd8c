//! Session actions
//!
//! Records why the current screen state was entered:
//! ```text
//! None      first display, nothing happened yet
//! Create    the screen built its content
//! Restore   the screen was recreated from saved state
//! Navigate  a page was shown on request
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    None,
    Create,
    Restore,
    Navigate,
}

impl Action {
    /// Returns true for the state of a screen that has not navigated yet
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Create => "create",
            Action::Restore => "restore",
            Action::Navigate => "navigate",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Action::None),
            "create" => Ok(Action::Create),
            "restore" => Ok(Action::Restore),
            "navigate" | "navigation" => Ok(Action::Navigate),
            _ => Err(SessionError::UnknownAction(s.to_string())),
        }
    }
}

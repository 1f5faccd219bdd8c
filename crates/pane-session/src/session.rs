//! Session data structure

use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Why the current view was entered
    pub action: Action,
    /// Index of the last tab recorded by a gated tab selection
    #[serde(default)]
    pub previous_tab: Option<usize>,
    /// Whether a tab selection should navigate.
    /// Kept false while the tab bar is being built.
    #[serde(default)]
    pub navigation_on_tab_selection_needed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the action behind the current view
    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Record the last selected tab
    pub fn set_previous_tab(&mut self, position: usize) {
        self.previous_tab = Some(position);
    }

    pub fn set_navigation_on_tab_selection_needed(&mut self, needed: bool) {
        self.navigation_on_tab_selection_needed = needed;
    }

    /// True when the session comes from a recreated screen
    pub fn is_restoring(&self) -> bool {
        self.action == Action::Restore
    }
}

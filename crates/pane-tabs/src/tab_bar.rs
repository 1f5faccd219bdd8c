//! Tab bar
//!
//! Tracks which tab is selected and reports every change as [`TabEvent`]s.
//! Like a platform tab strip, adding the first tab selects it.

use crate::error::TabError;
use crate::tab::{Tab, TabEvent};
use crate::Result;

#[derive(Debug, Default)]
pub struct TabBar {
    tabs: Vec<Tab>,
    selected: Option<usize>,
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab. Returns the selection event when it is the first one.
    pub fn add_tab(&mut self, title: impl Into<String>) -> Vec<TabEvent> {
        let position = self.tabs.len();
        self.tabs.push(Tab::new(position, title));

        if self.selected.is_none() {
            self.selected = Some(position);
            return vec![TabEvent::Selected(position)];
        }

        Vec::new()
    }

    /// Select the tab at `position`
    pub fn select(&mut self, position: usize) -> Result<Vec<TabEvent>> {
        if position >= self.tabs.len() {
            return Err(TabError::IndexOutOfBounds {
                index: position,
                count: self.tabs.len(),
            });
        }

        let events = match self.selected {
            Some(current) if current == position => vec![TabEvent::Reselected(position)],
            Some(current) => vec![TabEvent::Unselected(current), TabEvent::Selected(position)],
            None => vec![TabEvent::Selected(position)],
        };

        self.selected = Some(position);

        tracing::trace!(position, ?events, "Tab selection");

        Ok(events)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab(&self, position: usize) -> Option<&Tab> {
        self.tabs.get(position)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_is_selected() {
        let mut bar = TabBar::new();

        assert_eq!(bar.add_tab("Home"), vec![TabEvent::Selected(0)]);
        assert!(bar.add_tab("Feed").is_empty());

        assert_eq!(bar.selected(), Some(0));
        assert_eq!(bar.tab_count(), 2);
        assert_eq!(bar.tab(1).map(|t| t.title.as_str()), Some("Feed"));
    }

    #[test]
    fn test_select_events() {
        let mut bar = TabBar::new();
        for title in ["A", "B", "C"] {
            bar.add_tab(title);
        }

        assert_eq!(
            bar.select(2).unwrap(),
            vec![TabEvent::Unselected(0), TabEvent::Selected(2)]
        );
        assert_eq!(bar.select(2).unwrap(), vec![TabEvent::Reselected(2)]);
        assert_eq!(bar.selected(), Some(2));
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut bar = TabBar::new();
        bar.add_tab("Only");

        assert_eq!(
            bar.select(1),
            Err(TabError::IndexOutOfBounds { index: 1, count: 1 })
        );
        assert_eq!(bar.selected(), Some(0));
    }

    #[test]
    fn test_event_position() {
        assert_eq!(TabEvent::Unselected(4).position(), 4);
        assert_eq!(TabEvent::Reselected(1).position(), 1);
    }
}

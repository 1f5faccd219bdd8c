//! Tab data structure

/// One entry of the tab bar, mirroring a page of the pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Position in the tab bar
    pub position: usize,
    /// Text shown on the tab
    pub title: String,
}

impl Tab {
    pub fn new(position: usize, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
        }
    }
}

/// Selection change reported by the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// A tab became the selected one
    Selected(usize),
    /// The previously selected tab lost the selection
    Unselected(usize),
    /// The already selected tab was selected again
    Reselected(usize),
}

impl TabEvent {
    pub fn position(&self) -> usize {
        match self {
            TabEvent::Selected(p) | TabEvent::Unselected(p) | TabEvent::Reselected(p) => *p,
        }
    }
}

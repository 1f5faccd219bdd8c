//! Toolbar and busy indicator models

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyIndicator {
    visible: bool,
}

impl BusyIndicator {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolbar {
    pub title: String,
    busy: Option<BusyIndicator>,
}

impl Toolbar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            busy: None,
        }
    }

    /// Attach a hidden busy indicator
    pub fn with_busy_indicator(mut self) -> Self {
        self.busy = Some(BusyIndicator::default());
        self
    }

    pub fn busy_indicator(&self) -> Option<&BusyIndicator> {
        self.busy.as_ref()
    }

    pub fn busy_indicator_mut(&mut self) -> Option<&mut BusyIndicator> {
        self.busy.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_starts_hidden() {
        let mut toolbar = Toolbar::new("Orders").with_busy_indicator();
        assert_eq!(toolbar.busy_indicator().map(BusyIndicator::is_visible), Some(false));

        if let Some(busy) = toolbar.busy_indicator_mut() {
            busy.show();
        }
        assert_eq!(toolbar.busy_indicator().map(BusyIndicator::is_visible), Some(true));
    }

    #[test]
    fn test_toolbar_without_indicator() {
        let toolbar = Toolbar::new("Orders");
        assert!(toolbar.busy_indicator().is_none());
    }
}

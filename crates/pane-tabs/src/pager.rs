//! Pager
//!
//! Shows one page of a [`PageProvider`] at a time. Pages adjacent to the
//! current one, up to the offscreen limit, count as retained.

use std::ops::RangeInclusive;

use crate::page::{Page, PageProvider};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Previous,
    Next,
}

#[derive(Debug)]
pub struct Pager {
    provider: PageProvider,
    current: usize,
    /// False until the first page has been shown
    shown: bool,
    swipe_enabled: bool,
    offscreen_page_limit: usize,
}

impl Pager {
    pub const DEFAULT_OFFSCREEN_PAGE_LIMIT: usize = 1;

    pub fn new(provider: PageProvider) -> Self {
        Self {
            provider,
            current: 0,
            shown: false,
            swipe_enabled: true,
            offscreen_page_limit: Self::DEFAULT_OFFSCREEN_PAGE_LIMIT,
        }
    }

    /// Show the page at `position`
    pub fn set_current_item(&mut self, position: usize) -> Result<()> {
        self.provider.check_index(position)?;

        if position == self.current && self.shown {
            return Ok(());
        }

        tracing::debug!(from = self.current, to = position, "Pager page change");
        self.current = position;
        self.shown = true;

        if let Some(page) = self.provider.get_mut(position) {
            page.on_shown();
        }

        Ok(())
    }

    pub fn current_item(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&dyn Page> {
        self.provider.get(self.current)
    }

    pub fn page(&self, position: usize) -> Option<&dyn Page> {
        self.provider.get(position)
    }

    pub fn page_mut(&mut self, position: usize) -> Option<&mut (dyn Page + 'static)> {
        self.provider.get_mut(position)
    }

    pub fn page_count(&self) -> usize {
        self.provider.count()
    }

    pub fn page_title(&self, position: usize) -> Option<&str> {
        self.provider.title(position)
    }

    pub fn provider(&self) -> &PageProvider {
        &self.provider
    }

    pub fn swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
    }

    /// Handle a swipe gesture. Returns true if the current page changed.
    pub fn try_swipe(&mut self, direction: SwipeDirection) -> bool {
        if !self.swipe_enabled {
            tracing::trace!(?direction, "Swipe ignored, swiping is disabled");
            return false;
        }

        let target = match direction {
            SwipeDirection::Previous => self.current.checked_sub(1),
            SwipeDirection::Next => Some(self.current + 1).filter(|&p| p < self.page_count()),
        };

        match target {
            Some(position) => self.set_current_item(position).is_ok(),
            None => false,
        }
    }

    pub fn offscreen_page_limit(&self) -> usize {
        self.offscreen_page_limit
    }

    /// Set how many pages on each side of the current one stay retained.
    /// Values below 1 are raised to 1.
    pub fn set_offscreen_page_limit(&mut self, limit: usize) {
        if limit < 1 {
            tracing::warn!(
                requested = limit,
                "Offscreen page limit too small, using {}",
                Self::DEFAULT_OFFSCREEN_PAGE_LIMIT
            );
        }
        self.offscreen_page_limit = limit.max(Self::DEFAULT_OFFSCREEN_PAGE_LIMIT);
    }

    /// Positions of the pages kept alive around the current one
    pub fn retained_pages(&self) -> RangeInclusive<usize> {
        let start = self.current.saturating_sub(self.offscreen_page_limit);
        let end = self
            .current
            .saturating_add(self.offscreen_page_limit)
            .min(self.page_count() - 1);
        start..=end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabError;
    use crate::page::tests::pages;
    use std::cell::Cell;
    use std::rc::Rc;

    fn pager(ids: &[&str]) -> Pager {
        Pager::new(PageProvider::new(pages(ids), |i| format!("Page {}", i)).unwrap())
    }

    #[test]
    fn test_set_current_item() {
        let mut pager = pager(&["a", "b", "c"]);
        assert_eq!(pager.current_item(), 0);

        pager.set_current_item(2).unwrap();
        assert_eq!(pager.current_item(), 2);
        assert_eq!(pager.current_page().map(|p| p.id()), Some("c"));
        assert_eq!(pager.page_title(2), Some("Page 2"));
    }

    #[test]
    fn test_out_of_bounds_leaves_page_unchanged() {
        let mut pager = pager(&["a", "b"]);
        pager.set_current_item(1).unwrap();

        let result = pager.set_current_item(5);
        assert_eq!(result, Err(TabError::IndexOutOfBounds { index: 5, count: 2 }));
        assert_eq!(pager.current_item(), 1);
    }

    #[test]
    fn test_swipe_respects_flag_and_edges() {
        let mut pager = pager(&["a", "b", "c"]);

        pager.set_swipe_enabled(false);
        assert!(!pager.try_swipe(SwipeDirection::Next));
        assert_eq!(pager.current_item(), 0);

        pager.set_swipe_enabled(true);
        assert!(!pager.try_swipe(SwipeDirection::Previous));
        assert!(pager.try_swipe(SwipeDirection::Next));
        assert!(pager.try_swipe(SwipeDirection::Next));
        assert!(!pager.try_swipe(SwipeDirection::Next));
        assert_eq!(pager.current_item(), 2);
    }

    #[test]
    fn test_retained_pages() {
        let mut pager = pager(&["a", "b", "c", "d", "e"]);
        assert_eq!(pager.retained_pages(), 0..=1);

        pager.set_current_item(2).unwrap();
        assert_eq!(pager.retained_pages(), 1..=3);

        pager.set_offscreen_page_limit(2);
        pager.set_current_item(4).unwrap();
        assert_eq!(pager.retained_pages(), 2..=4);

        pager.set_offscreen_page_limit(0);
        assert_eq!(pager.offscreen_page_limit(), 1);
    }

    #[test]
    fn test_shown_page_is_notified() {
        struct CountingPage(Rc<Cell<usize>>);

        impl Page for CountingPage {
            fn id(&self) -> &str {
                "counting"
            }

            fn on_shown(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let shown = Rc::new(Cell::new(0));
        let mut pages = pages(&["a"]);
        pages.push(Box::new(CountingPage(Rc::clone(&shown))));
        let mut pager = Pager::new(PageProvider::new(pages, |_| String::new()).unwrap());

        pager.set_current_item(0).unwrap();
        assert_eq!(shown.get(), 0);

        pager.set_current_item(1).unwrap();
        pager.set_current_item(1).unwrap();
        assert_eq!(shown.get(), 1);

        pager.set_current_item(0).unwrap();
        pager.set_current_item(1).unwrap();
        assert_eq!(shown.get(), 2);
    }

    #[test]
    fn test_initial_page_is_notified_once() {
        struct CountingPage(Rc<Cell<usize>>);

        impl Page for CountingPage {
            fn id(&self) -> &str {
                "counting"
            }

            fn on_shown(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let shown = Rc::new(Cell::new(0));
        let mut set: Vec<Box<dyn Page>> = vec![Box::new(CountingPage(Rc::clone(&shown)))];
        set.extend(pages(&["b"]));
        let mut pager = Pager::new(PageProvider::new(set, |_| String::new()).unwrap());

        pager.set_current_item(0).unwrap();
        pager.set_current_item(0).unwrap();
        assert_eq!(shown.get(), 1);
    }
}

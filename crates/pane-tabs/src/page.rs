//! Pages and the page provider

use crate::error::TabError;
use crate::Result;

/// One unit of tabbed content
pub trait Page {
    /// Stable identifier, used in logs
    fn id(&self) -> &str;

    /// Called when the pager makes this page the current one
    fn on_shown(&mut self) {}
}

/// Fixed, ordered set of pages with their titles.
///
/// Titles are computed once at construction, so a title lookup only depends
/// on the position.
pub struct PageProvider {
    pages: Vec<Box<dyn Page>>,
    titles: Vec<String>,
}

impl PageProvider {
    pub fn new<F>(pages: Vec<Box<dyn Page>>, mut title: F) -> Result<Self>
    where
        F: FnMut(usize) -> String,
    {
        if pages.is_empty() {
            return Err(TabError::EmptyPageSet);
        }

        let titles = (0..pages.len()).map(&mut title).collect();

        Ok(Self { pages, titles })
    }

    pub fn count(&self) -> usize {
        self.pages.len()
    }

    pub fn get(&self, position: usize) -> Option<&dyn Page> {
        self.pages.get(position).map(|page| &**page)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut (dyn Page + 'static)> {
        self.pages.get_mut(position).map(|page| &mut **page)
    }

    pub fn title(&self, position: usize) -> Option<&str> {
        self.titles.get(position).map(String::as_str)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    /// Fail with [`TabError::IndexOutOfBounds`] unless `position` names a page
    pub fn check_index(&self, position: usize) -> Result<()> {
        if position < self.pages.len() {
            Ok(())
        } else {
            Err(TabError::IndexOutOfBounds {
                index: position,
                count: self.pages.len(),
            })
        }
    }
}

impl std::fmt::Debug for PageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageProvider")
            .field("pages", &self.pages.iter().map(|p| p.id()).collect::<Vec<_>>())
            .field("titles", &self.titles)
            .finish()
    }
}

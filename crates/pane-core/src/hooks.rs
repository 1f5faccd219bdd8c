//! Screen contracts
//!
//! [`ScreenHooks`] is what a concrete screen supplies to the controller.
//! [`MainScreen`] is what pages and hooks may ask of the controller.

use pane_session::{Action, SessionHandle};
use pane_tabs::Page;

use crate::data_access::DataAccess;
use crate::Result;

/// A page change requested in answer to a tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub position: usize,
    pub action: Action,
}

impl NavigationRequest {
    pub fn new(position: usize, action: Action) -> Self {
        Self { position, action }
    }

    /// Show `position` as a user navigation
    pub fn navigate(position: usize) -> Self {
        Self::new(position, Action::Navigate)
    }
}

/// Screen-specific behavior plugged into a
/// [`ScreenController`](crate::ScreenController).
pub trait ScreenHooks {
    /// Last step of creation, once tabs and pages are in place
    fn on_create_screen(&mut self, session: &SessionHandle);

    /// The data access layer to configure. `None` turns every data access
    /// setting into a no-op.
    fn data_access(&mut self) -> Option<Box<dyn DataAccess>>;

    /// Pages of the screen, in display order. Called once; must not be empty.
    fn pages(&mut self) -> Vec<Box<dyn Page>>;

    fn page_title(&self, position: usize) -> String;

    /// A tab was selected while tab navigation is enabled
    fn on_tab_selected(&mut self, position: usize) -> Option<NavigationRequest>;

    fn first_page_index(&self) -> usize;
}

/// Navigation contract of a screen
pub trait MainScreen {
    fn session(&self) -> SessionHandle;

    fn navigate_to_view(&mut self, position: usize, action: Action) -> Result<()>;
}

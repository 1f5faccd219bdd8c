//! Pane Tabs
//!
//! Headless models of the paged, tabbed part of a screen:
//! - A page set is fixed at construction and indexed by position
//! - The pager shows exactly one page and only moves when asked to
//! - The tab bar reports selection events; deciding what they mean is up to the owner

mod error;
mod page;
mod pager;
mod tab;
mod tab_bar;

pub use error::TabError;
pub use page::{Page, PageProvider};
pub use pager::{Pager, SwipeDirection};
pub use tab::{Tab, TabEvent};
pub use tab_bar::TabBar;

pub type Result<T> = std::result::Result<T, TabError>;

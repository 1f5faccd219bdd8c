//! Pane Core
//!
//! Base controller for tabbed, paged screens.
//! A screen owns its session; pages and tabs only report what happened.

mod config;
mod controller;
mod data_access;
mod error;
mod hooks;
mod lifecycle;
mod shell;

pub use config::ScreenConfig;
pub use controller::{ScreenController, PAGER_KEY};
pub use data_access::{DataAccess, DataAccessSettings};
pub use error::ScreenError;
pub use hooks::{MainScreen, NavigationRequest, ScreenHooks};
pub use lifecycle::LifecyclePhase;
pub use shell::{BusyIndicator, Toolbar};

// Re-export the building blocks screens implement against
pub use pane_session::{Action, SavedState, Session, SessionError, SessionHandle, SESSION_KEY};
pub use pane_tabs::{Page, PageProvider, Pager, SwipeDirection, Tab, TabBar, TabError, TabEvent};

pub type Result<T> = std::result::Result<T, ScreenError>;

/// Initialize logging.
///
/// `RUST_LOG` takes precedence; otherwise debug screens log at `debug`.
pub fn init_logging(config: &ScreenConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(true).init();
}

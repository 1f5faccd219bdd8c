//! Pane Session
//!
//! The navigation state of a screen:
//! - A Session records why the current view was entered, the last selected tab,
//!   and whether tab selection is allowed to trigger navigation
//! - Sessions survive screen recreation through a string-keyed saved-state bundle
//! - The stored form is a versioned JSON envelope so broken restores are detectable

mod action;
mod bundle;
mod codec;
mod error;
mod handle;
mod session;

pub use action::Action;
pub use bundle::{SavedState, SESSION_KEY};
pub use codec::SESSION_SCHEMA_VERSION;
pub use error::SessionError;
pub use handle::SessionHandle;
pub use session::Session;

pub type Result<T> = std::result::Result<T, SessionError>;

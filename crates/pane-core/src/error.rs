//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Session error: {0}")]
    Session(#[from] pane_session::SessionError),

    #[error("Tab error: {0}")]
    Tab(#[from] pane_tabs::TabError),

    #[error("Invalid lifecycle transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("This screen has no tab bar")]
    TabsDisabled,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

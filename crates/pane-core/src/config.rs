//! Screen configuration

use serde::{Deserialize, Serialize};

use crate::error::ScreenError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Verbose lifecycle logging, also forwarded to the data access layer
    pub debug: bool,
    /// Data access timeout in milliseconds
    pub timeout_ms: u64,
    /// Artificial data access delay in milliseconds
    pub delay_ms: u64,
    /// Whether the data access layer must send basic authentication
    pub basic_authentication: bool,
    /// Add a busy indicator to the toolbar
    pub waiting_indicator: bool,
    /// Add a tab bar mirroring the pages
    pub tabs: bool,
    /// Pages kept alive on each side of the current one
    pub offscreen_page_limit: usize,
}

impl ScreenConfig {
    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(ScreenError::Config(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.offscreen_page_limit == 0 {
            return Err(ScreenError::Config(
                "offscreen_page_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            debug: false,
            timeout_ms: 1000,
            delay_ms: 0,
            basic_authentication: false,
            waiting_indicator: true,
            tabs: true,
            offscreen_page_limit: 1,
        }
    }
}

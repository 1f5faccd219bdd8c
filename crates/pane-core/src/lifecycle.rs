//! Screen lifecycle
//!
//! Host callbacks arrive in a fixed order:
//! ```text
//! Created
//!   ↓ resume
//! Resumed  ⇄  Paused
//!               ↓ destroy
//!           Destroyed
//! ```
//! A screen that never came to the foreground may be destroyed right after
//! creation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePhase {
    /// Content built, not yet visible
    Created,
    /// In the foreground
    Resumed,
    /// Left the foreground, may come back
    Paused,
    /// Gone for good
    Destroyed,
}

impl LifecyclePhase {
    /// Check if the host may move the screen to `target`
    pub fn can_transition_to(&self, target: LifecyclePhase) -> bool {
        match (self, target) {
            (LifecyclePhase::Created, LifecyclePhase::Resumed) => true,
            (LifecyclePhase::Created, LifecyclePhase::Destroyed) => true,
            (LifecyclePhase::Resumed, LifecyclePhase::Paused) => true,
            (LifecyclePhase::Paused, LifecyclePhase::Resumed) => true,
            (LifecyclePhase::Paused, LifecyclePhase::Destroyed) => true,
            // Nothing leaves Destroyed, not even a repeat
            (LifecyclePhase::Destroyed, _) => false,
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn is_foreground(&self) -> bool {
        matches!(self, LifecyclePhase::Resumed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecyclePhase::Created => "created",
            LifecyclePhase::Resumed => "resumed",
            LifecyclePhase::Paused => "paused",
            LifecyclePhase::Destroyed => "destroyed",
        }
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

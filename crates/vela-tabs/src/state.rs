//! Browsing context configuration state
//!
//! ```text
//! Unconfigured
//!   ↓ privacy settings applied (once, at construction)
//! Configured
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextState {
    /// Engine settings not written yet; no navigation allowed
    Unconfigured,
    /// Privacy settings applied
    Configured,
}

impl ContextState {
    pub fn can_transition_to(&self, target: ContextState) -> bool {
        matches!(
            (self, target),
            (ContextState::Unconfigured, ContextState::Configured)
        )
    }

    pub fn can_navigate(&self) -> bool {
        matches!(self, ContextState::Configured)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextState::Unconfigured => "unconfigured",
            ContextState::Configured => "configured",
        }
    }
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContextState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unconfigured" => Ok(ContextState::Unconfigured),
            "configured" => Ok(ContextState::Configured),
            _ => Err(format!("Unknown context state: {}", s)),
        }
    }
}

//! Vela Tab Management
//!
//! Each tab owns a browsing context: the chrome's view of one embedded
//! engine page. A context is configured with the privacy settings when it is
//! created and consults the navigation filter before every navigation.

mod context;
mod error;
mod manager;
mod state;
mod tab;

pub use context::{BrowsingContext, NavigationOutcome};
pub use error::TabError;
pub use manager::TabManager;
pub use state::ContextState;
pub use tab::{Tab, BLANK_LABEL};

pub type Result<T> = std::result::Result<T, TabError>;

//! Vela Core
//!
//! Central coordination layer for the Vela browser chrome. The embedded
//! engine renders pages; everything the chrome decides lives here.

mod browser;
mod chrome;
mod config;
mod error;
mod feature;
mod settings;

pub use browser::Browser;
pub use chrome::{Shortcut, ToolbarAction, ToolbarOutcome};
pub use config::Config;
pub use error::CoreError;
pub use feature::{Feature, FeatureOutcome, FeatureStatus, PLACEHOLDER_BOOKMARKS};
pub use settings::AppSettings;

// Re-export core components
pub use vela_navigation::{
    resolve, HistoryEntry, InputResolution, InputResolver, SessionHistory, DEFAULT_SEARCH_ENGINE,
};
pub use vela_privacy::{
    should_allow, AdBlockFilter, CookiePolicy, FilterRuleSet, HttpCacheType, NavigationFilter,
    NavigationRequest, PrivacyConfig, PrivacyError, PrivacyFlagKind, PrivacyReport, RequestKind,
    WebSettings, DEFAULT_AD_PATTERNS,
};
pub use vela_storage::{Database, StorageError};
pub use vela_tabs::{BrowsingContext, ContextState, NavigationOutcome, Tab, TabError, TabManager};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `default_level`. Output goes to stderr.
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

//! Vela Privacy Protection
//!
//! Navigation filter:
//! - Every navigation (typed, link, redirect, sub-resource) is checked
//!   against an ordered list of regular expressions
//! - A match anywhere in the address denies the request
//!
//! Privacy settings written once per browsing context:
//! - Session-only cookies, memory-only HTTP cache, no storage path
//! - No script-opened windows, no local storage
//! - No remote access from local content
//! - XSS auditing on, WebGL off

mod error;
mod filter;
mod settings;

pub use error::PrivacyError;
pub use filter::{
    should_allow, AdBlockFilter, FilterRuleSet, NavigationFilter, NavigationRequest, RequestKind,
    DEFAULT_AD_PATTERNS,
};
pub use settings::{
    CookiePolicy, EngineSettings, FlagSupport, HttpCacheType, PrivacyConfig, PrivacyFlag,
    PrivacyFlagKind, PrivacyReport, WebSettings,
};

pub type Result<T> = std::result::Result<T, PrivacyError>;

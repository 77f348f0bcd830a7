//! Navigation filtering
//!
//! Patterns are regular expressions searched anywhere in the target address
//! (unanchored, case-sensitive). A pattern therefore also matches unrelated
//! addresses that merely contain its text, e.g. `ads.google.com` inside a
//! path segment.

use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::PrivacyError;
use crate::Result;

/// Patterns installed when no filter list is configured.
pub const DEFAULT_AD_PATTERNS: &[&str] = &[r"ad.doubleclick.net", r"ads.google.com"];

/// Why the engine is about to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    LinkClicked,
    Typed,
    FormSubmitted,
    BackForward,
    Reload,
    Redirect,
    Other,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::LinkClicked => "link_clicked",
            RequestKind::Typed => "typed",
            RequestKind::FormSubmitted => "form_submitted",
            RequestKind::BackForward => "back_forward",
            RequestKind::Reload => "reload",
            RequestKind::Redirect => "redirect",
            RequestKind::Other => "other",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "link_clicked" | "link" => Ok(RequestKind::LinkClicked),
            "typed" => Ok(RequestKind::Typed),
            "form_submitted" | "form" => Ok(RequestKind::FormSubmitted),
            "back_forward" => Ok(RequestKind::BackForward),
            "reload" => Ok(RequestKind::Reload),
            "redirect" => Ok(RequestKind::Redirect),
            "other" => Ok(RequestKind::Other),
            _ => Err(format!("Unknown request kind: {}", s)),
        }
    }
}

/// A navigation the browsing context wants to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub target_address: String,
    pub kind: RequestKind,
    pub is_main_frame: bool,
}

impl NavigationRequest {
    pub fn new(target_address: impl Into<String>, kind: RequestKind, is_main_frame: bool) -> Self {
        Self {
            target_address: target_address.into(),
            kind,
            is_main_frame,
        }
    }

    /// Top-level navigation typed into the address bar
    pub fn typed(target_address: impl Into<String>) -> Self {
        Self::new(target_address, RequestKind::Typed, true)
    }

    /// Load of an embedded resource (frame, script, image...)
    pub fn sub_resource(target_address: impl Into<String>) -> Self {
        Self::new(target_address, RequestKind::Other, false)
    }
}

/// Ordered list of compiled patterns. Fixed once built.
#[derive(Debug, Clone, Default)]
pub struct FilterRuleSet {
    rules: Vec<Regex>,
}

impl FilterRuleSet {
    /// Compile every pattern, failing on the first malformed one.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| PrivacyError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_AD_PATTERNS)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First pattern (in list order) found in `address`
    pub fn first_match(&self, address: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.is_match(address))
            .map(Regex::as_str)
    }

    pub fn is_match(&self, address: &str) -> bool {
        self.first_match(address).is_some()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Deny `request` if its target address matches any rule.
///
/// The request kind and frame level are not consulted: sub-resources and
/// top-level loads go through the same check.
pub fn should_allow(request: &NavigationRequest, rules: &FilterRuleSet) -> bool {
    !rules.is_match(&request.target_address)
}

/// Decides whether a browsing context may proceed with a navigation.
pub trait NavigationFilter: Send + Sync {
    fn should_allow(&self, request: &NavigationRequest) -> bool;
}

impl NavigationFilter for FilterRuleSet {
    fn should_allow(&self, request: &NavigationRequest) -> bool {
        should_allow(request, self)
    }
}

/// Pattern-based ad blocker shared by every browsing context.
///
/// Requests are checked against a snapshot of the rule set. Replacing the
/// rules swaps the snapshot, so a check in progress keeps the list it
/// started with.
pub struct AdBlockFilter {
    rules: RwLock<Arc<FilterRuleSet>>,
    blocked: AtomicU64,
}

impl AdBlockFilter {
    pub fn new(rules: FilterRuleSet) -> Self {
        Self {
            rules: RwLock::new(Arc::new(rules)),
            blocked: AtomicU64::new(0),
        }
    }

    pub fn with_default_rules() -> Result<Self> {
        Ok(Self::new(FilterRuleSet::with_defaults()?))
    }

    /// Current rule set snapshot
    pub fn rules(&self) -> Arc<FilterRuleSet> {
        self.rules.read().clone()
    }

    pub fn replace_rules(&self, rules: FilterRuleSet) {
        let count = rules.len();
        *self.rules.write() = Arc::new(rules);
        tracing::info!(rules = count, "Replaced navigation filter rules");
    }

    /// Number of requests denied since creation
    pub fn blocked_count(&self) -> u64 {
        self.blocked.load(Ordering::Relaxed)
    }
}

impl NavigationFilter for AdBlockFilter {
    fn should_allow(&self, request: &NavigationRequest) -> bool {
        let rules = self.rules();
        match rules.first_match(&request.target_address) {
            Some(pattern) => {
                self.blocked.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    url = %request.target_address,
                    kind = %request.kind,
                    main_frame = request.is_main_frame,
                    pattern = %pattern,
                    "Blocked navigation"
                );
                false
            }
            None => true,
        }
    }
}

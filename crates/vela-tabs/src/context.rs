//! Browsing context
//!
//! The chrome-side handle on one engine page. Every navigation the page
//! attempts is offered to the injected filter first; only allowed main-frame
//! navigations are committed to the session history.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vela_navigation::SessionHistory;
use vela_privacy::{
    NavigationFilter, NavigationRequest, PrivacyConfig, PrivacyReport, RequestKind, WebSettings,
};

use crate::error::TabError;
use crate::state::ContextState;
use crate::Result;

/// What happened to a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "address", rename_all = "lowercase")]
pub enum NavigationOutcome {
    /// The filter allowed it and the address is now current
    Committed(String),
    /// The filter denied it; the current page is untouched
    Blocked(String),
    /// Nothing to do (no history entry to move to, nothing loaded)
    Unchanged,
}

impl NavigationOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, NavigationOutcome::Committed(_))
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationOutcome::Blocked(_))
    }
}

/// Whether an allowed request changes the committed address. Back/forward
/// and reload requests move within history instead.
pub(crate) fn commits(request: &NavigationRequest) -> bool {
    request.is_main_frame
        && !matches!(request.kind, RequestKind::BackForward | RequestKind::Reload)
}

pub struct BrowsingContext {
    state: ContextState,
    settings: WebSettings,
    privacy_report: PrivacyReport,
    filter: Arc<dyn NavigationFilter>,
    history: SessionHistory,
}

impl BrowsingContext {
    /// Create a context and write the privacy settings before anything can
    /// be loaded into it.
    pub fn new(filter: Arc<dyn NavigationFilter>, privacy: &PrivacyConfig) -> Result<Self> {
        let mut context = Self {
            state: ContextState::Unconfigured,
            settings: WebSettings::new(),
            privacy_report: PrivacyReport::default(),
            filter,
            history: SessionHistory::new(),
        };

        context.configure(privacy)?;
        Ok(context)
    }

    fn configure(&mut self, privacy: &PrivacyConfig) -> Result<()> {
        if !self.state.can_transition_to(ContextState::Configured) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: ContextState::Configured.to_string(),
            });
        }

        self.privacy_report = privacy.apply(&mut self.settings);
        self.state = ContextState::Configured;

        tracing::debug!(
            applied = self.privacy_report.applied.len(),
            unsupported = self.privacy_report.unsupported.len(),
            "Browsing context configured"
        );

        Ok(())
    }

    /// Load an address typed by the user
    pub fn load(&mut self, address: &str) -> NavigationOutcome {
        let request = NavigationRequest::typed(address);
        if self.accept_navigation_request(&request) {
            NavigationOutcome::Committed(request.target_address)
        } else {
            NavigationOutcome::Blocked(request.target_address)
        }
    }

    /// Navigation hook called by the engine for links, redirects, form
    /// posts and embedded resources. Returns whether the engine may proceed.
    pub fn accept_navigation_request(&mut self, request: &NavigationRequest) -> bool {
        if !self.state.can_navigate() || !self.filter.should_allow(request) {
            return false;
        }

        if commits(request) {
            // A redirect stands in for the page that issued it
            if request.kind == RequestKind::Redirect {
                self.history.replace_current(request.target_address.clone());
            } else {
                self.history.push(request.target_address.clone());
            }
        }

        true
    }

    pub fn back(&mut self) -> NavigationOutcome {
        let Some(target) = self.history.peek_back().map(|e| e.url.clone()) else {
            return NavigationOutcome::Unchanged;
        };

        let request = NavigationRequest::new(target, RequestKind::BackForward, true);
        if !self.accept_navigation_request(&request) {
            return NavigationOutcome::Blocked(request.target_address);
        }

        self.history.go_back();
        NavigationOutcome::Committed(request.target_address)
    }

    pub fn forward(&mut self) -> NavigationOutcome {
        let Some(target) = self.history.peek_forward().map(|e| e.url.clone()) else {
            return NavigationOutcome::Unchanged;
        };

        let request = NavigationRequest::new(target, RequestKind::BackForward, true);
        if !self.accept_navigation_request(&request) {
            return NavigationOutcome::Blocked(request.target_address);
        }

        self.history.go_forward();
        NavigationOutcome::Committed(request.target_address)
    }

    pub fn reload(&mut self) -> NavigationOutcome {
        let Some(current) = self.history.current().map(|e| e.url.clone()) else {
            return NavigationOutcome::Unchanged;
        };

        let request = NavigationRequest::new(current, RequestKind::Reload, true);
        if self.accept_navigation_request(&request) {
            NavigationOutcome::Committed(request.target_address)
        } else {
            NavigationOutcome::Blocked(request.target_address)
        }
    }

    /// Current address, empty before the first committed navigation
    pub fn url(&self) -> &str {
        self.history.current().map(|e| e.url.as_str()).unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.history.current().map(|e| e.title.as_str()).unwrap_or("")
    }

    /// Title reported by the engine once the page has loaded
    pub fn set_title(&mut self, title: String) {
        if let Some(entry) = self.history.current_mut() {
            entry.title = title;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn settings(&self) -> &WebSettings {
        &self.settings
    }

    pub fn privacy_report(&self) -> &PrivacyReport {
        &self.privacy_report
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}

impl std::fmt::Debug for BrowsingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowsingContext")
            .field("state", &self.state)
            .field("url", &self.url())
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}

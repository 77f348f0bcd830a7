//! Tab data structure
//!
//! The tab strip shows the label, which follows the committed address.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use vela_privacy::{NavigationFilter, NavigationRequest, PrivacyConfig};

use crate::context::{commits, BrowsingContext, NavigationOutcome};
use crate::Result;

/// Label of a tab that has not loaded anything
pub const BLANK_LABEL: &str = "Blank";

#[derive(Debug)]
pub struct Tab {
    /// Unique identifier
    pub id: String,
    /// Text shown in the tab strip
    pub label: String,
    /// When the tab was opened
    pub created_at: DateTime<Utc>,
    context: BrowsingContext,
}

impl Tab {
    pub fn new(
        filter: Arc<dyn NavigationFilter>,
        privacy: &PrivacyConfig,
        label: impl Into<String>,
    ) -> Result<Self> {
        let label = label.into();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            label: if label.is_empty() {
                BLANK_LABEL.to_string()
            } else {
                label
            },
            created_at: Utc::now(),
            context: BrowsingContext::new(filter, privacy)?,
        })
    }

    pub fn context(&self) -> &BrowsingContext {
        &self.context
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }

    pub fn load(&mut self, address: &str) -> NavigationOutcome {
        self.after(|ctx| ctx.load(address))
    }

    pub fn back(&mut self) -> NavigationOutcome {
        self.after(BrowsingContext::back)
    }

    pub fn forward(&mut self) -> NavigationOutcome {
        self.after(BrowsingContext::forward)
    }

    pub fn reload(&mut self) -> NavigationOutcome {
        self.after(BrowsingContext::reload)
    }

    /// Offer an engine-originated request (link, redirect, form post,
    /// sub-resource) to the context. An allowed request that commits a new
    /// address reports `Committed`; other allowed requests report
    /// `Unchanged`.
    pub fn accept_navigation_request(
        &mut self,
        request: &NavigationRequest,
    ) -> NavigationOutcome {
        self.after(|ctx| {
            if !ctx.accept_navigation_request(request) {
                NavigationOutcome::Blocked(request.target_address.clone())
            } else if commits(request) {
                NavigationOutcome::Committed(request.target_address.clone())
            } else {
                NavigationOutcome::Unchanged
            }
        })
    }

    pub fn set_title(&mut self, title: String) {
        self.context.set_title(title);
    }

    /// Title with fallback to the tab label
    pub fn display_title(&self) -> &str {
        let title = self.context.title();
        if title.is_empty() {
            self.label.as_str()
        } else {
            title
        }
    }

    fn after<F>(&mut self, navigate: F) -> NavigationOutcome
    where
        F: FnOnce(&mut BrowsingContext) -> NavigationOutcome,
    {
        let outcome = navigate(&mut self.context);
        if let NavigationOutcome::Committed(address) = &outcome {
            self.label = address.clone();
            tracing::debug!(tab_id = %self.id, url = %address, "Tab navigated");
        }
        outcome
    }
}

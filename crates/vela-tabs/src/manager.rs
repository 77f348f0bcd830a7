//! Tab Manager
//!
//! Ordered tab strip with one current tab. The last remaining tab cannot be
//! closed.

use std::sync::Arc;

use vela_privacy::{NavigationFilter, PrivacyConfig};

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

pub struct TabManager {
    tabs: Vec<Tab>,
    current: Option<usize>,
    /// Shared by every browsing context
    filter: Arc<dyn NavigationFilter>,
    /// Written to each new context
    privacy: PrivacyConfig,
}

impl TabManager {
    pub fn new(filter: Arc<dyn NavigationFilter>, privacy: PrivacyConfig) -> Self {
        Self {
            tabs: Vec::new(),
            current: None,
            filter,
            privacy,
        }
    }

    /// Open a tab, load `url` into it when non-empty and make it current
    pub fn add_new_tab(&mut self, url: &str, label: &str) -> Result<&mut Tab> {
        let mut tab = Tab::new(Arc::clone(&self.filter), &self.privacy, label)?;

        if !url.is_empty() {
            tab.load(url);
        }

        tracing::info!(tab_id = %tab.id, url = %url, "Created new tab");

        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.current = Some(index);

        Ok(&mut self.tabs[index])
    }

    /// Close the tab at `index`.
    ///
    /// Returns `Ok(false)` without closing anything when it is the only tab.
    pub fn close_tab(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;

        if self.tabs.len() <= 1 {
            tracing::debug!("Refusing to close the last tab");
            return Ok(false);
        }

        let tab = self.tabs.remove(index);
        tracing::info!(tab_id = %tab.id, "Closed tab");

        // Same selection rule as a tab widget: the tab to the right of a
        // closed current tab takes its place, or the new last tab.
        self.current = self.current.map(|current| {
            if index < current {
                current - 1
            } else if index == current {
                index.min(self.tabs.len() - 1)
            } else {
                current
            }
        });

        Ok(true)
    }

    pub fn close_current_tab(&mut self) -> Result<bool> {
        let index = self.current.ok_or(TabError::NoCurrentTab)?;
        self.close_tab(index)
    }

    pub fn set_current(&mut self, index: usize) -> Result<&Tab> {
        self.check_index(index)?;
        self.current = Some(index);
        Ok(&self.tabs[index])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Result<&Tab> {
        self.current
            .and_then(|i| self.tabs.get(i))
            .ok_or(TabError::NoCurrentTab)
    }

    pub fn current_mut(&mut self) -> Result<&mut Tab> {
        self.current
            .and_then(|i| self.tabs.get_mut(i))
            .ok_or(TabError::NoCurrentTab)
    }

    /// Get a tab by ID
    pub fn get(&self, tab_id: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn privacy(&self) -> &PrivacyConfig {
        &self.privacy
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }
        Ok(())
    }
}

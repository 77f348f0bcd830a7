//! Back/forward history for a single browsing context

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(url: String) -> Self {
        Self {
            url,
            title: String::new(),
            visited_at: Utc::now(),
        }
    }
}

/// Linear session history with a cursor.
///
/// Committing a new entry while the cursor is behind the newest entry drops
/// everything ahead of the cursor.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a navigation
    pub fn push(&mut self, url: String) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }

        self.entries.push(HistoryEntry::new(url));
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Swap the current entry for `url` without growing the list. Pushes
    /// when the history is empty.
    pub fn replace_current(&mut self, url: String) {
        match self.current_mut() {
            Some(entry) => *entry = HistoryEntry::new(url),
            None => self.push(url),
        }
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn current_mut(&mut self) -> Option<&mut HistoryEntry> {
        self.cursor.and_then(|i| self.entries.get_mut(i))
    }

    pub fn peek_back(&self) -> Option<&HistoryEntry> {
        match self.cursor {
            Some(i) if i > 0 => self.entries.get(i - 1),
            _ => None,
        }
    }

    pub fn peek_forward(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|i| self.entries.get(i + 1))
    }

    pub fn can_go_back(&self) -> bool {
        self.peek_back().is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.peek_forward().is_some()
    }

    /// Move the cursor one entry back and return the new current entry
    pub fn go_back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor = self.cursor.map(|i| i - 1);
        self.touch_current();
        self.current()
    }

    /// Move the cursor one entry forward and return the new current entry
    pub fn go_forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor = self.cursor.map(|i| i + 1);
        self.touch_current();
        self.current()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn touch_current(&mut self) {
        if let Some(entry) = self.current_mut() {
            entry.visited_at = Utc::now();
        }
    }
}

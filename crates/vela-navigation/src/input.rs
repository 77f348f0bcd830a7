//! Input resolution for the address bar

use serde::{Deserialize, Serialize};

/// Search engine template used until the user picks another one.
pub const DEFAULT_SEARCH_ENGINE: &str = "https://www.google.com/search?q=";

/// Map raw address-bar text to the literal address to load.
///
/// The query is appended to `search_template` verbatim: no trimming and no
/// percent-encoding. Input without a `.` is always treated as a search, even
/// when it carries a scheme (`https://localhost` searches).
pub fn resolve(raw_input: &str, search_template: &str) -> String {
    InputResolution::classify(raw_input, search_template).into_address()
}

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "address")]
pub enum InputResolution {
    /// Navigate to an address
    Navigate(String),
    /// Search; holds the full search address
    Search(String),
}

impl InputResolution {
    fn classify(raw_input: &str, search_template: &str) -> Self {
        if !raw_input.contains('.') {
            let mut address = String::with_capacity(search_template.len() + raw_input.len());
            address.push_str(search_template);
            address.push_str(raw_input);
            return InputResolution::Search(address);
        }

        if raw_input.starts_with("http://") || raw_input.starts_with("https://") {
            InputResolution::Navigate(raw_input.to_string())
        } else {
            InputResolution::Navigate(format!("http://{raw_input}"))
        }
    }

    /// The address that should be handed to the browsing context.
    pub fn address(&self) -> &str {
        match self {
            InputResolution::Navigate(address) | InputResolution::Search(address) => address,
        }
    }

    pub fn into_address(self) -> String {
        match self {
            InputResolution::Navigate(address) | InputResolution::Search(address) => address,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, InputResolution::Search(_))
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Prefix the raw query is appended to
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_ENGINE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn set_search_engine(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into a search or a navigation
    pub fn resolve(&self, input: &str) -> InputResolution {
        let resolution = InputResolution::classify(input, &self.search_template);
        tracing::trace!(
            input = %input,
            address = %resolution.address(),
            search = resolution.is_search(),
            "Resolved address bar input"
        );
        resolution
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

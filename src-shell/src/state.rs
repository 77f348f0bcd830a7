//! Application state management
use vela_core::{Browser, Config, Result};

pub struct AppState {
    browser: Browser,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::from_browser(Browser::new(config)?))
    }

    pub fn from_browser(browser: Browser) -> Self {
        Self { browser }
    }

    pub fn initialize(&self) -> Result<()> {
        self.browser.initialize()
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        f(&self.browser)
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use std::path::PathBuf;
    use vela_core::Database;

    let config = Config::new(PathBuf::from("unused"));
    let browser = Browser::with_database(config, Database::open_in_memory().unwrap()).unwrap();
    let state = AppState::from_browser(browser);
    state.initialize().unwrap();
    state
}

//! Main browser state container
//!
//! The engine only renders. Tabs, settings and the navigation filter are
//! owned here and every chrome action goes through this type.

use parking_lot::RwLock;
use std::sync::Arc;

use vela_navigation::{InputResolution, InputResolver};
use vela_privacy::{AdBlockFilter, NavigationFilter, NavigationRequest};
use vela_storage::Database;
use vela_tabs::{NavigationOutcome, TabManager};

use crate::chrome::{Shortcut, ToolbarAction, ToolbarOutcome};
use crate::config::Config;
use crate::feature::{Feature, FeatureOutcome};
use crate::settings::AppSettings;
use crate::Result;

/// Label of the tab opened at startup
const NEW_TAB_LABEL: &str = "New Tab";

pub struct Browser {
    config: Config,
    db: Database,
    settings: RwLock<AppSettings>,
    /// Resolver for the URL bar, kept in step with the saved search engine
    input_resolver: RwLock<InputResolver>,
    /// Shared with every browsing context
    filter: Arc<AdBlockFilter>,
    tabs: RwLock<TabManager>,
}

impl Browser {
    /// Open the database under the configured data directory
    pub fn new(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let db = Database::open(config.database_path())?;
        Self::with_database(config, db)
    }

    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let filter = Arc::new(AdBlockFilter::new(config.filter_rules()?));
        let shared: Arc<dyn NavigationFilter> = filter.clone();
        let tabs = TabManager::new(shared, config.privacy.clone());

        Ok(Self {
            config,
            db,
            settings: RwLock::new(AppSettings::default()),
            input_resolver: RwLock::new(InputResolver::new()),
            filter,
            tabs: RwLock::new(tabs),
        })
    }

    /// Load persisted settings and open the first tab at the homepage
    pub fn initialize(&self) -> Result<()> {
        let settings = AppSettings::load(&self.db)?;
        self.input_resolver
            .write()
            .set_search_engine(settings.search_engine.clone());
        let homepage = settings.homepage.clone();
        *self.settings.write() = settings;

        let mut tabs = self.tabs.write();
        if tabs.is_empty() {
            tabs.add_new_tab(&homepage, NEW_TAB_LABEL)?;
        }

        tracing::info!(homepage = %homepage, rules = self.filter.rules().len(), "Browser initialized");
        Ok(())
    }

    // === Navigation ===

    /// Resolve URL bar text and load it in the current tab
    pub fn navigate_to_url_or_search(&self, text: &str) -> Result<NavigationOutcome> {
        let resolution = self.resolve(text);
        Ok(self.tabs.write().current_mut()?.load(resolution.address()))
    }

    pub fn resolve(&self, text: &str) -> InputResolution {
        self.input_resolver.read().resolve(text)
    }

    pub fn navigate_home(&self) -> Result<NavigationOutcome> {
        let homepage = self.settings.read().homepage.clone();
        Ok(self.tabs.write().current_mut()?.load(&homepage))
    }

    pub fn navigate_back(&self) -> Result<NavigationOutcome> {
        Ok(self.tabs.write().current_mut()?.back())
    }

    pub fn navigate_forward(&self) -> Result<NavigationOutcome> {
        Ok(self.tabs.write().current_mut()?.forward())
    }

    pub fn reload_page(&self) -> Result<NavigationOutcome> {
        Ok(self.tabs.write().current_mut()?.reload())
    }

    /// Navigation hook for the current tab: links, redirects, form posts
    /// and sub-resources requested by the engine.
    pub fn handle_navigation_request(
        &self,
        request: &NavigationRequest,
    ) -> Result<NavigationOutcome> {
        Ok(self
            .tabs
            .write()
            .current_mut()?
            .accept_navigation_request(request))
    }

    /// Page title reported by the engine for the current tab
    pub fn set_page_title(&self, title: String) -> Result<()> {
        self.tabs.write().current_mut()?.set_title(title);
        Ok(())
    }

    // === Tab operations ===

    /// Open a tab, optionally loading `url`, and make it current. Returns
    /// the new tab's ID.
    pub fn add_new_tab(&self, url: Option<&str>, label: &str) -> Result<String> {
        let mut tabs = self.tabs.write();
        let tab = tabs.add_new_tab(url.unwrap_or(""), label)?;
        Ok(tab.id.clone())
    }

    /// Returns `false` when the current tab is the last one
    pub fn close_current_tab(&self) -> Result<bool> {
        Ok(self.tabs.write().close_current_tab()?)
    }

    pub fn close_tab(&self, index: usize) -> Result<bool> {
        Ok(self.tabs.write().close_tab(index)?)
    }

    /// Select a tab and return the text the URL bar should show
    pub fn switch_tab(&self, index: usize) -> Result<String> {
        let mut tabs = self.tabs.write();
        let tab = tabs.set_current(index)?;
        tracing::debug!(tab_id = %tab.id, index, "Switched tab");
        Ok(tab.url().to_string())
    }

    /// Current tab's URL, empty when nothing has loaded
    pub fn url_bar_text(&self) -> Result<String> {
        Ok(self.tabs.read().current()?.url().to_string())
    }

    /// Read access to the tab strip
    pub fn with_tabs<R>(&self, f: impl FnOnce(&TabManager) -> R) -> R {
        f(&self.tabs.read())
    }

    // === Settings ===

    pub fn settings(&self) -> AppSettings {
        self.settings.read().clone()
    }

    /// Settings form Save action. Nothing changes unless both values are
    /// valid and persisted.
    pub fn save_settings(&self, search_engine: &str, tint_color: &str) -> Result<AppSettings> {
        let mut updated = self.settings.read().clone();
        updated.set_search_engine(search_engine)?;
        updated.set_tint_color(tint_color)?;
        updated.save(&self.db)?;

        self.input_resolver
            .write()
            .set_search_engine(updated.search_engine.clone());
        *self.settings.write() = updated.clone();

        Ok(updated)
    }

    // === Privacy ===

    /// Filter decision for an arbitrary address. Not counted as a block.
    pub fn should_allow(&self, address: &str) -> bool {
        !self.filter.rules().is_match(address)
    }

    pub fn blocked_count(&self) -> u64 {
        self.filter.blocked_count()
    }

    pub fn filter(&self) -> &AdBlockFilter {
        &self.filter
    }

    // === Chrome ===

    pub fn trigger(&self, feature: Feature) -> FeatureOutcome {
        feature.trigger()
    }

    pub fn dispatch(&self, action: ToolbarAction) -> Result<ToolbarOutcome> {
        tracing::debug!(action = action.label(), "Toolbar action");

        let outcome = match action {
            ToolbarAction::Back => ToolbarOutcome::Navigation(self.navigate_back()?),
            ToolbarAction::Forward => ToolbarOutcome::Navigation(self.navigate_forward()?),
            ToolbarAction::Reload => ToolbarOutcome::Navigation(self.reload_page()?),
            ToolbarAction::Home => ToolbarOutcome::Navigation(self.navigate_home()?),
            ToolbarAction::Settings => ToolbarOutcome::OpenSettings,
            ToolbarAction::Bookmarks => ToolbarOutcome::Feature(self.trigger(Feature::Bookmarks)),
            ToolbarAction::ReadingMode => {
                ToolbarOutcome::Feature(self.trigger(Feature::ReadingMode))
            }
            ToolbarAction::Incognito => ToolbarOutcome::Feature(self.trigger(Feature::Incognito)),
            ToolbarAction::Extensions => {
                ToolbarOutcome::Feature(self.trigger(Feature::Extensions))
            }
        };

        Ok(outcome)
    }

    /// Handle a key sequence. Returns the shortcut that fired, or `None`
    /// when the keys are not bound.
    pub fn handle_shortcut(&self, keys: &str) -> Result<Option<Shortcut>> {
        let Some(shortcut) = Shortcut::parse(keys) else {
            return Ok(None);
        };

        match shortcut {
            Shortcut::NewTab => {
                self.add_new_tab(None, "")?;
            }
            Shortcut::CloseTab => {
                self.close_current_tab()?;
            }
        }

        Ok(Some(shortcut))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use std::path::PathBuf;
    use vela_privacy::RequestKind;

    fn browser() -> Browser {
        let config = Config::new(PathBuf::from("unused"));
        let browser = Browser::with_database(config, Database::open_in_memory().unwrap()).unwrap();
        browser.initialize().unwrap();
        browser
    }

    #[test]
    fn test_initialize_opens_homepage() {
        let browser = browser();
        assert_eq!(browser.url_bar_text().unwrap(), "http://www.google.com");
        browser.with_tabs(|tabs| {
            assert_eq!(tabs.len(), 1);
            assert_eq!(tabs.tabs()[0].label, "http://www.google.com");
        });
    }

    #[test]
    fn test_navigate_to_url_or_search() {
        let browser = browser();

        let outcome = browser.navigate_to_url_or_search("openai").unwrap();
        assert_eq!(
            outcome,
            NavigationOutcome::Committed("https://www.google.com/search?q=openai".to_string())
        );

        browser.navigate_to_url_or_search("example.com").unwrap();
        assert_eq!(browser.url_bar_text().unwrap(), "http://example.com");
    }

    #[test]
    fn test_blocked_address_keeps_page() {
        let browser = browser();

        let outcome = browser
            .navigate_to_url_or_search("https://ad.doubleclick.net/x")
            .unwrap();
        assert!(outcome.is_blocked());
        assert_eq!(browser.url_bar_text().unwrap(), "http://www.google.com");
        assert_eq!(browser.blocked_count(), 1);
    }

    #[test]
    fn test_back_forward_home() {
        let browser = browser();
        browser.navigate_to_url_or_search("https://example.com").unwrap();

        assert!(browser.navigate_back().unwrap().is_committed());
        assert_eq!(browser.url_bar_text().unwrap(), "http://www.google.com");
        assert!(browser.navigate_forward().unwrap().is_committed());
        assert_eq!(browser.url_bar_text().unwrap(), "https://example.com");

        browser.navigate_home().unwrap();
        assert_eq!(browser.url_bar_text().unwrap(), "http://www.google.com");
    }

    #[test]
    fn test_tabs_and_url_bar() {
        let browser = browser();
        browser.add_new_tab(Some("https://example.org"), "").unwrap();
        assert_eq!(browser.url_bar_text().unwrap(), "https://example.org");

        assert_eq!(browser.switch_tab(0).unwrap(), "http://www.google.com");
        assert!(browser.close_tab(1).unwrap());
        assert!(!browser.close_current_tab().unwrap());
        assert!(matches!(browser.switch_tab(4), Err(CoreError::Tab(_))));
    }

    #[test]
    fn test_shortcuts() {
        let browser = browser();

        assert_eq!(browser.handle_shortcut("Ctrl+T").unwrap(), Some(Shortcut::NewTab));
        browser.with_tabs(|tabs| {
            assert_eq!(tabs.len(), 2);
            assert_eq!(tabs.current().unwrap().label, "Blank");
        });
        assert_eq!(browser.url_bar_text().unwrap(), "");

        assert_eq!(browser.handle_shortcut("Ctrl+W").unwrap(), Some(Shortcut::CloseTab));
        browser.handle_shortcut("Ctrl+W").unwrap();
        browser.with_tabs(|tabs| assert_eq!(tabs.len(), 1));

        assert_eq!(browser.handle_shortcut("Ctrl+Z").unwrap(), None);
    }

    #[test]
    fn test_save_settings_updates_resolver() {
        let browser = browser();

        let saved = browser
            .save_settings("https://duckduckgo.com/?q=", "#336699")
            .unwrap();
        assert_eq!(saved.tint_color, "#336699");
        assert_eq!(
            browser.resolve("rust").address(),
            "https://duckduckgo.com/?q=rust"
        );
        assert_eq!(AppSettings::load(browser.database()).unwrap(), saved);
    }

    #[test]
    fn test_invalid_settings_change_nothing() {
        let browser = browser();

        assert!(browser.save_settings("https://duckduckgo.com/?q=", "blue").is_err());
        assert_eq!(browser.settings(), AppSettings::default());
        assert_eq!(
            browser.database().get_setting("search_engine").unwrap(),
            None
        );
    }

    #[test]
    fn test_placeholder_toolbar_actions_are_inert() {
        let browser = browser();
        let before = browser.url_bar_text().unwrap();

        for action in [
            ToolbarAction::Bookmarks,
            ToolbarAction::ReadingMode,
            ToolbarAction::Incognito,
            ToolbarAction::Extensions,
        ] {
            assert!(matches!(
                browser.dispatch(action).unwrap(),
                ToolbarOutcome::Feature(_)
            ));
        }

        assert_eq!(browser.url_bar_text().unwrap(), before);
        browser.with_tabs(|tabs| assert_eq!(tabs.len(), 1));
        assert_eq!(
            browser.dispatch(ToolbarAction::Settings).unwrap(),
            ToolbarOutcome::OpenSettings
        );
        assert!(matches!(
            browser.dispatch(ToolbarAction::Reload).unwrap(),
            ToolbarOutcome::Navigation(NavigationOutcome::Committed(_))
        ));
    }

    #[test]
    fn test_should_allow() {
        let browser = browser();
        assert!(!browser.should_allow("https://example.com/ads.google.com.evil.com"));
        assert!(browser.should_allow("https://example.com"));
    }

    #[test]
    fn test_new_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("profile"));

        let browser = Browser::new(config).unwrap();
        browser.initialize().unwrap();
        assert!(dir.path().join("profile").join("vela.db").exists());
    }

    #[test]
    fn test_engine_requests_reach_current_tab() {
        let browser = browser();

        let link = NavigationRequest::new("https://example.com/a", RequestKind::LinkClicked, true);
        assert!(browser.handle_navigation_request(&link).unwrap().is_committed());
        assert_eq!(browser.url_bar_text().unwrap(), "https://example.com/a");
        browser.with_tabs(|tabs| {
            assert_eq!(tabs.current().unwrap().label, "https://example.com/a")
        });

        let ad = NavigationRequest::sub_resource("https://ads.google.com/banner.js");
        assert!(browser.handle_navigation_request(&ad).unwrap().is_blocked());
        assert_eq!(browser.url_bar_text().unwrap(), "https://example.com/a");
        browser.with_tabs(|tabs| {
            assert_eq!(tabs.current().unwrap().label, "https://example.com/a")
        });
        assert_eq!(browser.blocked_count(), 1);
    }

    #[test]
    fn test_should_allow_does_not_count_blocks() {
        let browser = browser();
        assert!(!browser.should_allow("https://ad.doubleclick.net/x"));
        assert!(!browser.should_allow("https://ads.google.com/"));
        assert_eq!(browser.blocked_count(), 0);
    }

    #[test]
    fn test_every_toolbar_action_dispatches() {
        let browser = browser();

        for action in ToolbarAction::ALL {
            let outcome = browser.dispatch(action).unwrap();
            match action.feature() {
                Some(feature) => {
                    assert_eq!(outcome, ToolbarOutcome::Feature(feature.trigger()))
                }
                None if action == ToolbarAction::Settings => {
                    assert_eq!(outcome, ToolbarOutcome::OpenSettings)
                }
                None => assert!(matches!(outcome, ToolbarOutcome::Navigation(_))),
            }
        }
    }
}

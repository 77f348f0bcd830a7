//! Navigation commands

use serde::Serialize;

use super::CommandResult;
use crate::state::AppState;
use vela_core::{Browser, InputResolution, InputResolver, NavigationOutcome, NavigationRequest};

#[derive(Debug, Serialize)]
pub struct NavigationInfo {
    pub outcome: NavigationOutcome,
    /// URL bar text after the action
    pub url_bar: String,
}

fn navigation_info(
    browser: &Browser,
    outcome: NavigationOutcome,
) -> vela_core::Result<NavigationInfo> {
    Ok(NavigationInfo {
        outcome,
        url_bar: browser.url_bar_text()?,
    })
}

/// Resolve input with an explicit template or the saved search engine
pub fn resolve_input(
    state: &AppState,
    input: &str,
    search_engine: Option<String>,
) -> CommandResult<InputResolution> {
    match search_engine {
        Some(template) => {
            CommandResult::ok(InputResolver::with_search_engine(template).resolve(input))
        }
        None => state.with_browser(|browser| Ok(browser.resolve(input))).into(),
    }
}

pub fn navigate(state: &AppState, input: &str) -> CommandResult<NavigationInfo> {
    state
        .with_browser(|browser| {
            let outcome = browser.navigate_to_url_or_search(input)?;
            navigation_info(browser, outcome)
        })
        .into()
}

pub fn go_back(state: &AppState) -> CommandResult<NavigationInfo> {
    state
        .with_browser(|browser| navigation_info(browser, browser.navigate_back()?))
        .into()
}

pub fn go_forward(state: &AppState) -> CommandResult<NavigationInfo> {
    state
        .with_browser(|browser| navigation_info(browser, browser.navigate_forward()?))
        .into()
}

pub fn reload(state: &AppState) -> CommandResult<NavigationInfo> {
    state
        .with_browser(|browser| navigation_info(browser, browser.reload_page()?))
        .into()
}

pub fn go_home(state: &AppState) -> CommandResult<NavigationInfo> {
    state
        .with_browser(|browser| navigation_info(browser, browser.navigate_home()?))
        .into()
}

/// Route an engine-originated request through the current tab
pub fn engine_request(
    state: &AppState,
    request: &NavigationRequest,
) -> CommandResult<NavigationInfo> {
    state
        .with_browser(|browser| {
            let outcome = browser.handle_navigation_request(request)?;
            navigation_info(browser, outcome)
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[test]
    fn test_resolve_input() {
        let state = test_state();

        let result = resolve_input(&state, "openai", None).data.unwrap();
        assert!(result.is_search());
        assert_eq!(result.address(), "https://www.google.com/search?q=openai");

        let result = resolve_input(&state, "rust", Some("https://duckduckgo.com/?q=".to_string()))
            .data
            .unwrap();
        assert_eq!(result.address(), "https://duckduckgo.com/?q=rust");
    }

    #[test]
    fn test_navigate_and_back() {
        let state = test_state();

        let info = navigate(&state, "example.com").data.unwrap();
        assert_eq!(info.url_bar, "http://example.com");

        let info = go_back(&state).data.unwrap();
        assert!(info.outcome.is_committed());
        assert_eq!(info.url_bar, "http://www.google.com");
    }

    #[test]
    fn test_blocked_navigation_reports_outcome() {
        let state = test_state();
        let info = navigate(&state, "https://ads.google.com/").data.unwrap();
        assert!(info.outcome.is_blocked());
        assert_eq!(info.url_bar, "http://www.google.com");
    }
}

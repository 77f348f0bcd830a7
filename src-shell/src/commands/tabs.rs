//! Tab management commands
use serde::Serialize;

use crate::state::AppState;
use vela_core::TabManager;

#[derive(Debug, Serialize)]
pub struct TabInfo {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub title: String,
    pub url: String,
    pub current: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl TabInfo {
    pub fn collect(tabs: &TabManager) -> Vec<TabInfo> {
        let current = tabs.current_index();
        tabs.tabs()
            .iter()
            .enumerate()
            .map(|(index, tab)| TabInfo {
                index,
                id: tab.id.clone(),
                label: tab.label.clone(),
                title: tab.display_title().to_string(),
                url: tab.url().to_string(),
                current: current == Some(index),
                can_go_back: tab.context().can_go_back(),
                can_go_forward: tab.context().can_go_forward(),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<vela_core::Result<T>> for CommandResult<T> {
    fn from(result: vela_core::Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SwitchInfo {
    /// Text the URL bar shows for the newly selected tab
    pub url_bar: String,
}

#[derive(Debug, Serialize)]
pub struct CloseInfo {
    /// `false` when the tab was the last one and stayed open
    pub closed: bool,
}

pub fn get_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    state
        .with_browser(|browser| Ok(browser.with_tabs(TabInfo::collect)))
        .into()
}

pub fn new_tab(state: &AppState, url: Option<String>) -> CommandResult<Vec<TabInfo>> {
    state
        .with_browser(|browser| {
            browser.add_new_tab(url.as_deref(), "")?;
            Ok(browser.with_tabs(TabInfo::collect))
        })
        .into()
}

pub fn close_current_tab(state: &AppState) -> CommandResult<CloseInfo> {
    state
        .with_browser(|browser| {
            Ok(CloseInfo {
                closed: browser.close_current_tab()?,
            })
        })
        .into()
}

pub fn switch_tab(state: &AppState, index: usize) -> CommandResult<SwitchInfo> {
    state
        .with_browser(|browser| {
            Ok(SwitchInfo {
                url_bar: browser.switch_tab(index)?,
            })
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[test]
    fn test_tab_commands() {
        let state = test_state();

        let tabs = new_tab(&state, Some("https://example.org".to_string()));
        let tabs = tabs.data.unwrap();
        assert_eq!(tabs.len(), 2);
        assert!(tabs[1].current);
        assert_eq!(tabs[1].label, "https://example.org");

        let switched = switch_tab(&state, 0).data.unwrap();
        assert_eq!(switched.url_bar, "http://www.google.com");

        assert!(close_current_tab(&state).data.unwrap().closed);
        assert!(!close_current_tab(&state).data.unwrap().closed);
    }

    #[test]
    fn test_switch_out_of_range_is_error() {
        let state = test_state();
        let result = switch_tab(&state, 7);
        assert!(!result.success);
        assert!(result.error.is_some());
    }
}

//! Settings commands

use super::CommandResult;
use crate::state::AppState;
use vela_core::AppSettings;

pub fn get_settings(state: &AppState) -> CommandResult<AppSettings> {
    state.with_browser(|browser| Ok(browser.settings())).into()
}

pub fn set_search_engine(state: &AppState, template: &str) -> CommandResult<AppSettings> {
    state
        .with_browser(|browser| {
            let current = browser.settings();
            browser.save_settings(template, &current.tint_color)
        })
        .into()
}

pub fn set_tint_color(state: &AppState, color: &str) -> CommandResult<AppSettings> {
    state
        .with_browser(|browser| {
            let current = browser.settings();
            browser.save_settings(&current.search_engine, color)
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[test]
    fn test_settings_commands() {
        let state = test_state();
        assert_eq!(get_settings(&state).data.unwrap(), AppSettings::default());

        let updated = set_search_engine(&state, "https://search.example/?q=").data.unwrap();
        assert_eq!(updated.search_engine, "https://search.example/?q=");
        assert_eq!(updated.tint_color, "#202020");

        let updated = set_tint_color(&state, "#ABCDEF").data.unwrap();
        assert_eq!(updated.tint_color, "#abcdef");
        assert_eq!(updated.search_engine, "https://search.example/?q=");
    }

    #[test]
    fn test_invalid_tint_reported() {
        let state = test_state();
        let result = set_tint_color(&state, "red");
        assert!(!result.success);
        assert!(result.error.unwrap().contains("tint_color"));
    }
}

//! Privacy commands

use serde::Serialize;

use super::CommandResult;
use crate::state::AppState;
use vela_core::{FilterRuleSet, NavigationRequest, PrivacyConfig, PrivacyReport};

#[derive(Debug, Serialize)]
pub struct FilterDecision {
    pub address: String,
    pub allowed: bool,
    /// First pattern that matched, when denied
    pub matched_pattern: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PrivacyInfo {
    pub config: PrivacyConfig,
    /// How the current tab's engine took the flags
    pub report: PrivacyReport,
    pub filter_rules: Vec<String>,
    pub blocked_count: u64,
}

fn decide(rules: &FilterRuleSet, address: &str) -> FilterDecision {
    let matched_pattern = rules.first_match(address).map(str::to_string);
    FilterDecision {
        address: address.to_string(),
        allowed: vela_core::should_allow(&NavigationRequest::typed(address), rules),
        matched_pattern,
    }
}

/// Check an address against ad-hoc patterns, or the configured filter
/// when none are given
pub fn check_address(
    state: &AppState,
    address: &str,
    patterns: &[String],
) -> CommandResult<FilterDecision> {
    if !patterns.is_empty() {
        return match FilterRuleSet::new(patterns) {
            Ok(rules) => CommandResult::ok(decide(&rules, address)),
            Err(e) => CommandResult::err(e.to_string()),
        };
    }

    state
        .with_browser(|browser| Ok(decide(&browser.filter().rules(), address)))
        .into()
}

pub fn get_privacy_info(state: &AppState) -> CommandResult<PrivacyInfo> {
    state
        .with_browser(|browser| {
            let report = browser.with_tabs(|tabs| {
                tabs.current()
                    .map(|tab| tab.context().privacy_report().clone())
            })?;

            Ok(PrivacyInfo {
                config: browser.config().privacy.clone(),
                report,
                filter_rules: browser.filter().rules().patterns().map(str::to_string).collect(),
                blocked_count: browser.blocked_count(),
            })
        })
        .into()
}

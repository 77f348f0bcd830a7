//! Placeholder feature commands

use serde::Serialize;

use super::CommandResult;
use crate::state::AppState;
use vela_core::{Feature, FeatureOutcome, FeatureStatus, ToolbarAction};

#[derive(Debug, Serialize)]
pub struct FeatureInfo {
    pub feature: Feature,
    pub label: &'static str,
    pub status: FeatureStatus,
}

#[derive(Debug, Serialize)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub label: &'static str,
    pub icon: &'static str,
    pub feature: Option<Feature>,
}

#[derive(Debug, Serialize)]
pub struct FeatureList {
    pub features: Vec<FeatureInfo>,
    pub toolbar: Vec<ToolbarButton>,
}

pub fn list_features() -> CommandResult<FeatureList> {
    let features = Feature::ALL
        .iter()
        .map(|feature| FeatureInfo {
            feature: *feature,
            label: feature.label(),
            status: feature.status(),
        })
        .collect();

    let toolbar = ToolbarAction::ALL
        .iter()
        .map(|action| ToolbarButton {
            action: *action,
            label: action.label(),
            icon: action.icon(),
            feature: action.feature(),
        })
        .collect();

    CommandResult::ok(FeatureList { features, toolbar })
}

pub fn trigger_feature(state: &AppState, feature: Feature) -> CommandResult<FeatureOutcome> {
    state.with_browser(|browser| Ok(browser.trigger(feature))).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[test]
    fn test_list_features() {
        let list = list_features().data.unwrap();
        assert_eq!(list.features.len(), 4);
        assert!(list
            .features
            .iter()
            .all(|f| f.status == FeatureStatus::NotImplemented));
        assert_eq!(list.toolbar.len(), 9);
        assert_eq!(list.toolbar[0].icon, "icons/back.png");
    }

    #[test]
    fn test_trigger_bookmarks() {
        let state = test_state();
        match trigger_feature(&state, Feature::Bookmarks).data.unwrap() {
            FeatureOutcome::Menu(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}

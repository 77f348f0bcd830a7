//! Toolbar actions and keyboard shortcuts

use serde::{Deserialize, Serialize};

use crate::feature::{Feature, FeatureOutcome};
use vela_tabs::NavigationOutcome;

/// Buttons on the navigation toolbar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarAction {
    Back,
    Forward,
    Reload,
    Home,
    Bookmarks,
    ReadingMode,
    Settings,
    Incognito,
    Extensions,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 9] = [
        ToolbarAction::Back,
        ToolbarAction::Forward,
        ToolbarAction::Reload,
        ToolbarAction::Home,
        ToolbarAction::Bookmarks,
        ToolbarAction::ReadingMode,
        ToolbarAction::Settings,
        ToolbarAction::Incognito,
        ToolbarAction::Extensions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarAction::Back => "Back",
            ToolbarAction::Forward => "Forward",
            ToolbarAction::Reload => "Reload",
            ToolbarAction::Home => "Home",
            ToolbarAction::Bookmarks => "Bookmarks",
            ToolbarAction::ReadingMode => "Reading Mode",
            ToolbarAction::Settings => "Settings",
            ToolbarAction::Incognito => "Incognito",
            ToolbarAction::Extensions => "Extensions",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolbarAction::Back => "icons/back.png",
            ToolbarAction::Forward => "icons/forward.png",
            ToolbarAction::Reload => "icons/reload.png",
            ToolbarAction::Home => "icons/home.png",
            ToolbarAction::Bookmarks => "icons/bookmark.png",
            ToolbarAction::ReadingMode => "icons/read.png",
            ToolbarAction::Settings => "icons/settings.png",
            ToolbarAction::Incognito => "icons/incognito.png",
            ToolbarAction::Extensions => "icons/extensions.png",
        }
    }

    /// The placeholder feature behind this button, if any
    pub fn feature(&self) -> Option<Feature> {
        match self {
            ToolbarAction::Bookmarks => Some(Feature::Bookmarks),
            ToolbarAction::ReadingMode => Some(Feature::ReadingMode),
            ToolbarAction::Incognito => Some(Feature::Incognito),
            ToolbarAction::Extensions => Some(Feature::Extensions),
            _ => None,
        }
    }
}

/// Result of pressing a toolbar button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ToolbarOutcome {
    Navigation(NavigationOutcome),
    Feature(FeatureOutcome),
    /// The settings form should be shown
    OpenSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    /// Ctrl+T
    NewTab,
    /// Ctrl+W
    CloseTab,
}

impl Shortcut {
    /// Parse a key sequence such as `Ctrl+T` (case and spacing ignored)
    pub fn parse(keys: &str) -> Option<Self> {
        let normalized: String = keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "ctrl+t" => Some(Shortcut::NewTab),
            "ctrl+w" => Some(Shortcut::CloseTab),
            _ => None,
        }
    }

    pub fn keys(&self) -> &'static str {
        match self {
            Shortcut::NewTab => "Ctrl+T",
            Shortcut::CloseTab => "Ctrl+W",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shortcuts() {
        assert_eq!(Shortcut::parse("Ctrl+T"), Some(Shortcut::NewTab));
        assert_eq!(Shortcut::parse("ctrl + w"), Some(Shortcut::CloseTab));
        assert_eq!(Shortcut::parse("Ctrl+Q"), None);
    }

    #[test]
    fn test_toolbar_features() {
        let with_feature: Vec<_> = ToolbarAction::ALL
            .iter()
            .filter_map(|a| a.feature())
            .collect();
        assert_eq!(with_feature, Feature::ALL.to_vec());
        assert_eq!(ToolbarAction::ReadingMode.icon(), "icons/read.png");
    }
}

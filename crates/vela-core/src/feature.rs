//! Placeholder features
//!
//! These toolbar entries are recognized but do nothing yet. Triggering one
//! never changes browser state.

use serde::{Deserialize, Serialize};

/// Entries shown by the Bookmarks menu until bookmarks exist
pub const PLACEHOLDER_BOOKMARKS: [&str; 2] = ["Placeholder Bookmark 1", "Placeholder Bookmark 2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Bookmarks,
    ReadingMode,
    Incognito,
    Extensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum FeatureOutcome {
    /// A menu of entries to show; choosing one does nothing
    Menu(Vec<String>),
    NotImplemented(Feature),
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Bookmarks,
        Feature::ReadingMode,
        Feature::Incognito,
        Feature::Extensions,
    ];

    pub fn status(&self) -> FeatureStatus {
        FeatureStatus::NotImplemented
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Bookmarks => "Bookmarks",
            Feature::ReadingMode => "Reading Mode",
            Feature::Incognito => "Incognito",
            Feature::Extensions => "Extensions",
        }
    }

    pub fn trigger(&self) -> FeatureOutcome {
        tracing::debug!(feature = self.label(), "Placeholder feature triggered");
        match self {
            Feature::Bookmarks => {
                FeatureOutcome::Menu(PLACEHOLDER_BOOKMARKS.iter().map(|s| s.to_string()).collect())
            }
            other => FeatureOutcome::NotImplemented(*other),
        }
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bookmarks" => Ok(Feature::Bookmarks),
            "reading" | "reading_mode" | "reading-mode" => Ok(Feature::ReadingMode),
            "incognito" => Ok(Feature::Incognito),
            "extensions" => Ok(Feature::Extensions),
            _ => Err(format!("Unknown feature: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_features_inactive() {
        for feature in Feature::ALL {
            assert_eq!(feature.status(), FeatureStatus::NotImplemented);
        }
    }

    #[test]
    fn test_bookmarks_menu_placeholders() {
        assert_eq!(
            Feature::Bookmarks.trigger(),
            FeatureOutcome::Menu(vec![
                "Placeholder Bookmark 1".to_string(),
                "Placeholder Bookmark 2".to_string()
            ])
        );
    }

    #[test]
    fn test_stub_features_report_not_implemented() {
        for feature in [Feature::ReadingMode, Feature::Incognito, Feature::Extensions] {
            assert_eq!(feature.trigger(), FeatureOutcome::NotImplemented(feature));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("reading".parse::<Feature>().unwrap(), Feature::ReadingMode);
        assert!("sync".parse::<Feature>().is_err());
    }
}

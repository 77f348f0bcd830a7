//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vela_privacy::{FilterRuleSet, PrivacyConfig, DEFAULT_AD_PATTERNS};

use crate::Result;

const DATABASE_FILE: &str = "vela.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the settings database
    pub data_dir: PathBuf,
    /// Navigation filter patterns (regular expressions)
    pub filter_patterns: Vec<String>,
    /// Privacy settings written to every browsing context
    pub privacy: PrivacyConfig,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            filter_patterns: DEFAULT_AD_PATTERNS.iter().map(|p| p.to_string()).collect(),
            privacy: PrivacyConfig::default(),
        }
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    /// Compile the filter patterns. A malformed pattern is a startup error.
    pub fn filter_rules(&self) -> Result<FilterRuleSet> {
        Ok(FilterRuleSet::new(&self.filter_patterns)?)
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Vela"))
            .unwrap_or_else(|| PathBuf::from(".vela"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

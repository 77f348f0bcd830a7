//! User-editable application settings
//!
//! Loaded from the settings table at startup and written back when the
//! settings form is saved. Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use url::Url;

use vela_navigation::DEFAULT_SEARCH_ENGINE;
use vela_storage::Database;

use crate::error::CoreError;
use crate::Result;

const KEY_SEARCH_ENGINE: &str = "search_engine";
const KEY_TINT_COLOR: &str = "tint_color";
const KEY_HOMEPAGE: &str = "homepage";

pub const DEFAULT_TINT_COLOR: &str = "#202020";
pub const DEFAULT_HOMEPAGE: &str = "http://www.google.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Prefix the address-bar query is appended to
    pub search_engine: String,
    /// Chrome tint as `#rrggbb`
    pub tint_color: String,
    /// Address opened by the Home button and the first tab
    pub homepage: String,
}

impl AppSettings {
    pub fn load(db: &Database) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            search_engine: db
                .get_setting(KEY_SEARCH_ENGINE)?
                .unwrap_or(defaults.search_engine),
            tint_color: db.get_setting(KEY_TINT_COLOR)?.unwrap_or(defaults.tint_color),
            homepage: db.get_setting(KEY_HOMEPAGE)?.unwrap_or(defaults.homepage),
        })
    }

    pub fn save(&self, db: &Database) -> Result<()> {
        db.set_settings(&[
            (KEY_SEARCH_ENGINE, self.search_engine.as_str()),
            (KEY_TINT_COLOR, self.tint_color.as_str()),
            (KEY_HOMEPAGE, self.homepage.as_str()),
        ])?;
        tracing::info!(search_engine = %self.search_engine, tint = %self.tint_color, "Settings saved");
        Ok(())
    }

    /// Set the search template; it must be an absolute http(s) address
    pub fn set_search_engine(&mut self, template: &str) -> Result<()> {
        let parsed = Url::parse(template).map_err(|e| CoreError::InvalidSetting {
            field: KEY_SEARCH_ENGINE,
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::InvalidSetting {
                field: KEY_SEARCH_ENGINE,
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        // The raw template is kept: the query is appended to it verbatim.
        self.search_engine = template.to_string();
        Ok(())
    }

    pub fn set_tint_color(&mut self, color: &str) -> Result<()> {
        let valid = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());

        if !valid {
            return Err(CoreError::InvalidSetting {
                field: KEY_TINT_COLOR,
                reason: format!("`{}` is not a #rrggbb color", color),
            });
        }

        self.tint_color = color.to_lowercase();
        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            tint_color: DEFAULT_TINT_COLOR.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
        }
    }
}

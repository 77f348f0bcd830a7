//! Privacy settings applied to a browsing context
//!
//! | Capability                          | Value           |
//! |-------------------------------------|-----------------|
//! | Persistent cookies                  | Session only    |
//! | HTTP cache                          | Memory only     |
//! | Persistent storage path             | None            |
//! | Scripts may open windows            | No              |
//! | Local storage                       | Disabled        |
//! | Local content → remote URLs         | Disabled        |
//! | XSS auditing                        | Enabled         |
//! | WebGL                               | Disabled        |

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookiePolicy {
    /// Cookies live in memory for the session only
    NoPersistentCookies,
    /// Session cookies are kept in memory, persistent ones on disk
    AllowPersistentCookies,
    /// Session cookies are written to disk as well
    ForcePersistentCookies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpCacheType {
    Memory,
    Disk,
    NoCache,
}

/// One assignment on the engine's settings object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivacyFlag {
    PersistentCookies(CookiePolicy),
    HttpCache(HttpCacheType),
    PersistentStoragePath(Option<PathBuf>),
    JavascriptCanOpenWindows(bool),
    LocalStorage(bool),
    LocalContentCanAccessRemoteUrls(bool),
    XssAuditing(bool),
    WebGl(bool),
}

impl PrivacyFlag {
    pub fn kind(&self) -> PrivacyFlagKind {
        match self {
            PrivacyFlag::PersistentCookies(_) => PrivacyFlagKind::PersistentCookies,
            PrivacyFlag::HttpCache(_) => PrivacyFlagKind::HttpCache,
            PrivacyFlag::PersistentStoragePath(_) => PrivacyFlagKind::PersistentStoragePath,
            PrivacyFlag::JavascriptCanOpenWindows(_) => PrivacyFlagKind::JavascriptCanOpenWindows,
            PrivacyFlag::LocalStorage(_) => PrivacyFlagKind::LocalStorage,
            PrivacyFlag::LocalContentCanAccessRemoteUrls(_) => {
                PrivacyFlagKind::LocalContentCanAccessRemoteUrls
            }
            PrivacyFlag::XssAuditing(_) => PrivacyFlagKind::XssAuditing,
            PrivacyFlag::WebGl(_) => PrivacyFlagKind::WebGl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyFlagKind {
    PersistentCookies,
    HttpCache,
    PersistentStoragePath,
    JavascriptCanOpenWindows,
    LocalStorage,
    LocalContentCanAccessRemoteUrls,
    XssAuditing,
    WebGl,
}

impl PrivacyFlagKind {
    pub const ALL: [PrivacyFlagKind; 8] = [
        PrivacyFlagKind::PersistentCookies,
        PrivacyFlagKind::HttpCache,
        PrivacyFlagKind::PersistentStoragePath,
        PrivacyFlagKind::JavascriptCanOpenWindows,
        PrivacyFlagKind::LocalStorage,
        PrivacyFlagKind::LocalContentCanAccessRemoteUrls,
        PrivacyFlagKind::XssAuditing,
        PrivacyFlagKind::WebGl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyFlagKind::PersistentCookies => "persistent_cookies",
            PrivacyFlagKind::HttpCache => "http_cache",
            PrivacyFlagKind::PersistentStoragePath => "persistent_storage_path",
            PrivacyFlagKind::JavascriptCanOpenWindows => "javascript_can_open_windows",
            PrivacyFlagKind::LocalStorage => "local_storage",
            PrivacyFlagKind::LocalContentCanAccessRemoteUrls => {
                "local_content_can_access_remote_urls"
            }
            PrivacyFlagKind::XssAuditing => "xss_auditing",
            PrivacyFlagKind::WebGl => "webgl",
        }
    }
}

impl std::fmt::Display for PrivacyFlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the engine has an equivalent for a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagSupport {
    Supported,
    Unsupported,
}

/// The embedded engine's profile/settings object.
///
/// Engines map each flag to their nearest capability and report
/// `Unsupported` when they have none.
pub trait EngineSettings {
    fn apply_flag(&mut self, flag: PrivacyFlag) -> FlagSupport;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyReport {
    pub applied: Vec<PrivacyFlagKind>,
    pub unsupported: Vec<PrivacyFlagKind>,
}

impl PrivacyReport {
    pub fn is_complete(&self) -> bool {
        self.unsupported.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    pub cookie_policy: CookiePolicy,
    pub http_cache: HttpCacheType,
    pub persistent_storage_path: Option<PathBuf>,
    pub javascript_can_open_windows: bool,
    pub local_storage_enabled: bool,
    pub local_content_can_access_remote_urls: bool,
    pub xss_auditing_enabled: bool,
    pub webgl_enabled: bool,
}

impl PrivacyConfig {
    /// Every flag this config writes, one per capability
    pub fn flags(&self) -> Vec<PrivacyFlag> {
        vec![
            PrivacyFlag::PersistentCookies(self.cookie_policy),
            PrivacyFlag::HttpCache(self.http_cache),
            PrivacyFlag::PersistentStoragePath(self.persistent_storage_path.clone()),
            PrivacyFlag::JavascriptCanOpenWindows(self.javascript_can_open_windows),
            PrivacyFlag::LocalStorage(self.local_storage_enabled),
            PrivacyFlag::LocalContentCanAccessRemoteUrls(self.local_content_can_access_remote_urls),
            PrivacyFlag::XssAuditing(self.xss_auditing_enabled),
            PrivacyFlag::WebGl(self.webgl_enabled),
        ]
    }

    /// Write every flag to the engine settings.
    pub fn apply(&self, settings: &mut dyn EngineSettings) -> PrivacyReport {
        let mut report = PrivacyReport::default();

        for flag in self.flags() {
            let kind = flag.kind();
            match settings.apply_flag(flag) {
                FlagSupport::Supported => report.applied.push(kind),
                FlagSupport::Unsupported => {
                    tracing::warn!(flag = %kind, "Privacy flag not supported by engine");
                    report.unsupported.push(kind);
                }
            }
        }

        report
    }
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            cookie_policy: CookiePolicy::NoPersistentCookies,
            http_cache: HttpCacheType::Memory,
            persistent_storage_path: None,
            javascript_can_open_windows: false,
            local_storage_enabled: false,
            local_content_can_access_remote_urls: false,
            xss_auditing_enabled: true,
            webgl_enabled: false,
        }
    }
}

/// In-process settings record for a browsing context.
///
/// Fields stay `None` until a flag is written; this engine supports every flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSettings {
    pub cookie_policy: Option<CookiePolicy>,
    pub http_cache: Option<HttpCacheType>,
    pub persistent_storage_path: Option<Option<PathBuf>>,
    pub javascript_can_open_windows: Option<bool>,
    pub local_storage_enabled: Option<bool>,
    pub local_content_can_access_remote_urls: Option<bool>,
    pub xss_auditing_enabled: Option<bool>,
    pub webgl_enabled: Option<bool>,
}

impl WebSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once every capability has been written
    pub fn is_fully_configured(&self) -> bool {
        self.cookie_policy.is_some()
            && self.http_cache.is_some()
            && self.persistent_storage_path.is_some()
            && self.javascript_can_open_windows.is_some()
            && self.local_storage_enabled.is_some()
            && self.local_content_can_access_remote_urls.is_some()
            && self.xss_auditing_enabled.is_some()
            && self.webgl_enabled.is_some()
    }
}

impl EngineSettings for WebSettings {
    fn apply_flag(&mut self, flag: PrivacyFlag) -> FlagSupport {
        match flag {
            PrivacyFlag::PersistentCookies(policy) => self.cookie_policy = Some(policy),
            PrivacyFlag::HttpCache(cache) => self.http_cache = Some(cache),
            PrivacyFlag::PersistentStoragePath(path) => self.persistent_storage_path = Some(path),
            PrivacyFlag::JavascriptCanOpenWindows(v) => self.javascript_can_open_windows = Some(v),
            PrivacyFlag::LocalStorage(v) => self.local_storage_enabled = Some(v),
            PrivacyFlag::LocalContentCanAccessRemoteUrls(v) => {
                self.local_content_can_access_remote_urls = Some(v)
            }
            PrivacyFlag::XssAuditing(v) => self.xss_auditing_enabled = Some(v),
            PrivacyFlag::WebGl(v) => self.webgl_enabled = Some(v),
        }
        FlagSupport::Supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine without GPU or XSS auditor controls
    #[derive(Default)]
    struct MinimalEngine {
        written: Vec<PrivacyFlagKind>,
    }

    impl EngineSettings for MinimalEngine {
        fn apply_flag(&mut self, flag: PrivacyFlag) -> FlagSupport {
            match flag {
                PrivacyFlag::WebGl(_) | PrivacyFlag::XssAuditing(_) => FlagSupport::Unsupported,
                other => {
                    self.written.push(other.kind());
                    FlagSupport::Supported
                }
            }
        }
    }

    #[test]
    fn test_default_config_is_hardened() {
        let mut settings = WebSettings::new();
        let report = PrivacyConfig::default().apply(&mut settings);

        assert!(report.is_complete());
        assert_eq!(report.applied, PrivacyFlagKind::ALL.to_vec());
        assert!(settings.is_fully_configured());

        assert_eq!(settings.cookie_policy, Some(CookiePolicy::NoPersistentCookies));
        assert_eq!(settings.http_cache, Some(HttpCacheType::Memory));
        assert_eq!(settings.persistent_storage_path, Some(None));
        assert_eq!(settings.javascript_can_open_windows, Some(false));
        assert_eq!(settings.local_storage_enabled, Some(false));
        assert_eq!(settings.local_content_can_access_remote_urls, Some(false));
        assert_eq!(settings.xss_auditing_enabled, Some(true));
        assert_eq!(settings.webgl_enabled, Some(false));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let config = PrivacyConfig::default();
        let mut once = WebSettings::new();
        config.apply(&mut once);

        let mut twice = WebSettings::new();
        config.apply(&mut twice);
        config.apply(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_flag_order_irrelevant() {
        let config = PrivacyConfig::default();
        let mut forward = WebSettings::new();
        let mut reverse = WebSettings::new();

        for flag in config.flags() {
            forward.apply_flag(flag);
        }
        for flag in config.flags().into_iter().rev() {
            reverse.apply_flag(flag);
        }

        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_unsupported_flags_reported() {
        let mut engine = MinimalEngine::default();
        let report = PrivacyConfig::default().apply(&mut engine);

        assert!(!report.is_complete());
        assert_eq!(
            report.unsupported,
            vec![PrivacyFlagKind::XssAuditing, PrivacyFlagKind::WebGl]
        );
        assert_eq!(report.applied.len(), 6);
        assert_eq!(engine.written, report.applied);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: PrivacyConfig = serde_json::from_str(r#"{"webgl_enabled": true}"#).unwrap();
        assert!(config.webgl_enabled);
        assert_eq!(config.cookie_policy, CookiePolicy::NoPersistentCookies);
        assert!(config.xss_auditing_enabled);
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::result::AdminResult;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Root of the backend, e.g. `https://api.kotohiro.com`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub items_per_page: Option<u32>,
    /// Value of the `SessionId` cookie issued by the backend at login.
    #[serde(default)]
    pub session_cookie: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AdminConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/talk-admin/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("talk-admin/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("talk-admin\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> AdminResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Applies command-line or environment overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, session: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        if session.is_some() {
            self.session_cookie = session;
        }
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_items_per_page(&self) -> u32 {
        self.items_per_page
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.effective_base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.effective_items_per_page(), 10);
        assert_eq!(config.effective_timeout_secs(), 30);
        assert!(config.session_cookie.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"https://admin.example.com/\"\nitems_per_page = 25\nsession_cookie = \"abc\"\n",
        )
        .unwrap();

        let config = AdminConfig::load_from(&path).unwrap();
        assert_eq!(config.effective_base_url(), "https://admin.example.com");
        assert_eq!(config.effective_items_per_page(), 25);
        assert_eq!(config.session_cookie.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "items_per_page = \"many\"").unwrap();

        let err = AdminConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn test_zero_items_per_page_falls_back() {
        let config = AdminConfig {
            items_per_page: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_items_per_page(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = AdminConfig {
            base_url: Some("https://file.example.com".into()),
            session_cookie: Some("from-file".into()),
            ..Default::default()
        }
        .with_overrides(None, Some("from-flag".into()));

        assert_eq!(config.effective_base_url(), "https://file.example.com");
        assert_eq!(config.session_cookie.as_deref(), Some("from-flag"));
    }
}

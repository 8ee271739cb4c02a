//! Host settings for the message store
//!
//! Each setting is resolved from (in order of priority):
//! 1. Runtime environment variables
//! 2. JSON file (~/.config/spamview/settings.json)
//! 3. Built-in defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::models::DEFAULT_LOCAL_ADDRESS;

/// Settings filename in the spamview config directory
const SETTINGS_FILE: &str = "settings.json";

const ENV_API_BASE_URL: &str = "SPAMVIEW_API_BASE_URL";
const ENV_LOCAL_ADDRESS: &str = "SPAMVIEW_LOCAL_ADDRESS";

/// Settings the host needs to build a store
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Overrides the host origin as the API base address
    pub api_base_url: Option<String>,
    /// Sender address of the local user (drives the sent folder)
    pub local_address: String,
}

/// On-disk settings file format
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SettingsFile {
    api_base_url: Option<String>,
    local_address: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            local_address: DEFAULT_LOCAL_ADDRESS.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment, then the default settings file
    pub fn load() -> Result<Self> {
        let file = if config::config_exists(SETTINGS_FILE) {
            Some(config::load_json::<SettingsFile>(SETTINGS_FILE)?)
        } else {
            None
        };
        Ok(Self::resolve(|key| std::env::var(key).ok(), file))
    }

    /// Load settings from a specific JSON file, ignoring the environment
    pub fn from_file(path: &Path) -> Result<Self> {
        let file: SettingsFile = config::load_json_file(path)?;
        Ok(Self::resolve(|_| None, Some(file)))
    }

    /// Parse settings from a JSON string, ignoring the environment
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SettingsFile =
            serde_json::from_str(json).context("Failed to parse settings JSON")?;
        Ok(Self::resolve(|_| None, Some(file)))
    }

    /// Merge sources field by field: env beats file beats default
    fn resolve<F>(env: F, file: Option<SettingsFile>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let api_base_url = non_empty(env(ENV_API_BASE_URL)).or(non_empty(file.api_base_url));
        let local_address = non_empty(env(ENV_LOCAL_ADDRESS))
            .or(non_empty(file.local_address))
            .unwrap_or_else(|| DEFAULT_LOCAL_ADDRESS.to_string());

        Self {
            api_base_url,
            local_address,
        }
    }

    /// The API base address: the override if set, else the host origin
    pub fn base_url(&self, origin: &str) -> Result<Url> {
        let raw = self.api_base_url.as_deref().unwrap_or(origin);
        Url::parse(raw).with_context(|| format!("Invalid API base URL: {}", raw))
    }

    /// Get the default settings file path (~/.config/spamview/settings.json)
    pub fn default_settings_path() -> Option<PathBuf> {
        config::config_path(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(env_of(&[]), None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.local_address, "me@example.com");
    }

    #[test]
    fn test_parse_settings_json() {
        let json = r#"{
            "ApiBaseUrl": "http://api.internal:5000",
            "LocalAddress": "ops@corp.io"
        }"#;

        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.api_base_url.as_deref(), Some("http://api.internal:5000"));
        assert_eq!(settings.local_address, "ops@corp.io");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = SettingsFile {
            api_base_url: Some("http://from-file:5000".to_string()),
            local_address: Some("file@corp.io".to_string()),
        };
        let env = env_of(&[(ENV_API_BASE_URL, "http://from-env:8080")]);

        let settings = Settings::resolve(env, Some(file));
        assert_eq!(settings.api_base_url.as_deref(), Some("http://from-env:8080"));
        assert_eq!(settings.local_address, "file@corp.io");
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let file = SettingsFile {
            api_base_url: Some("".to_string()),
            local_address: None,
        };
        let env = env_of(&[(ENV_LOCAL_ADDRESS, "  ")]);

        let settings = Settings::resolve(env, Some(file));
        assert_eq!(settings.api_base_url, None);
        assert_eq!(settings.local_address, DEFAULT_LOCAL_ADDRESS);
    }

    #[test]
    fn test_base_url_falls_back_to_origin() {
        let settings = Settings::default();
        let url = settings.base_url("http://localhost:5000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/");

        let settings = Settings {
            api_base_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        };
        let url = settings.base_url("http://localhost:5000").unwrap();
        assert_eq!(url.host_str(), Some("api.example.com"));
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = Settings {
            api_base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(settings.base_url("http://localhost:5000").is_err());
    }

    #[test]
    fn test_default_settings_path() {
        let path = Settings::default_settings_path().unwrap();
        assert!(path.ends_with("spamview/settings.json"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "LocalAddress": "me@home.net" }"#).unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.api_base_url, None);
        assert_eq!(settings.local_address, "me@home.net");
    }
}

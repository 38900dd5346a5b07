//! Configuration handling for the page
//!
//! The file is only ever read. Page state (theme, field contents, slider
//! position) is never written back.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageConfig {
    /// Lowest slider value
    pub slider_min: Option<i64>,
    /// Highest slider value
    pub slider_max: Option<i64>,
    /// Amount moved by one arrow key press
    pub slider_step: Option<i64>,
    /// Slider value at startup
    pub slider_initial: Option<i64>,
    /// Unit label after the slider value
    pub slider_unit: Option<String>,
}

impl PageConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "explorer", "explorer-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: PageConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, logging and ignoring a malformed file
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring unreadable config: {err:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert!(config.slider_min.is_none());
        assert!(config.slider_max.is_none());
        assert!(config.slider_step.is_none());
        assert!(config.slider_initial.is_none());
        assert!(config.slider_unit.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = PageConfig {
            slider_min: Some(0),
            slider_max: Some(400_000),
            slider_step: Some(500),
            slider_initial: Some(384_400),
            slider_unit: Some("km".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PageConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PageConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"slider_unit": "mi", "unknown_field": "value"}"#;
        let parsed: PageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.slider_unit, Some("mi".to_string()));
        assert!(parsed.slider_max.is_none());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("explorer-tui-missing-config.json");
        let _ = fs::remove_file(&path);
        let config = PageConfig::load_from(&path).unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "explorer-tui-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"slider_max": 2000, "slider_step": 10}"#).unwrap();
        let config = PageConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.slider_max, Some(2000));
        assert_eq!(config.slider_step, Some(10));
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "explorer-tui-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let result = PageConfig::load_from(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_returns_ok_or_default() {
        // Depends on the machine's config dir; must never panic
        let _config = PageConfig::load_or_default();
    }
}

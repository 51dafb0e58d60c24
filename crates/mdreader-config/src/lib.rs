//! mdreader Config
//!
//! This crate handles configuration loading and management
//! for mdreader, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdreader/config.toml`
//! - macOS: `~/Library/Application Support/mdreader/config.toml`
//! - Windows: `%APPDATA%\mdreader\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdreader_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod page;
mod reader;

pub use page::PageConfig;
pub use reader::{ReaderConfig, DEFAULT_DOCUMENT};

use mdreader_core::{ReaderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[reader]
Directory       = "."
DefaultDocument = "data_dictionary.md"

[page]
Standalone  = true
Lang        = "zh-TW"
TitlePrefix = "Markdown Reader"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Document lookup configuration
    #[serde(default)]
    pub reader: ReaderConfig,

    /// Page template configuration
    #[serde(default)]
    pub page: PageConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdreader_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[reader]"));
    /// assert!(toml.contains("[page]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdreader")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ReaderError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReaderError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// If `override_config` names an existing file it is loaded, otherwise it
    /// is parsed as inline TOML. The override is a complete config: keys it
    /// leaves out hold their defaults and replace the loaded values.
    ///
    /// ```no_run
    /// use mdreader_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[page]\nStandalone = false")).unwrap();
    /// assert!(!config.page.standalone);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.is_file() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| ReaderError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Every field is taken from `other`, including fields that were only
    /// filled in by defaults when `other` was parsed.
    ///
    /// ```
    /// use mdreader_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::parse(r#"
    ///     [reader]
    ///     DefaultDocument = "README.md"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.reader.default_document, "README.md");
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.reader.merge(&other.reader);
        self.page.merge(&other.page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reader.default_document, DEFAULT_DOCUMENT);
        assert_eq!(config.reader.directory, PathBuf::from("."));
        assert!(config.page.standalone);
    }

    #[test]
    fn test_default_toml_matches_default() {
        let parsed = Config::parse(DEFAULT_TOML).unwrap();
        let default = Config::default();
        assert_eq!(parsed.reader.directory, default.reader.directory);
        assert_eq!(parsed.reader.default_document, default.reader.default_document);
        assert_eq!(parsed.page.lang, default.page.lang);
        assert_eq!(parsed.page.title_prefix, default.page.title_prefix);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_config = Config::parse(
            r#"
            [reader]
            Directory = "docs"
            [page]
            Standalone = false
        "#,
        )
        .unwrap();

        base.merge(&override_config);
        assert_eq!(base.reader.directory, PathBuf::from("docs"));
        assert!(!base.page.standalone);
        assert_eq!(base.page.lang, "zh-TW");
    }

    #[test]
    fn test_merge_resets_keys_missing_from_override() {
        let mut base = Config::parse("[reader]\nDirectory = \"docs\"").unwrap();
        let override_config = Config::parse("[page]\nLang = 'en'").unwrap();

        base.merge(&override_config);
        assert_eq!(base.page.lang, "en");
        assert_eq!(base.reader.directory, PathBuf::from("."));
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = Config::parse("[reader").unwrap_err();
        assert!(matches!(err, ReaderError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("mdreader"));
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut config = Config::default();
        config.page.lang = "en".to_string();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&toml_str).unwrap();

        assert_eq!(parsed.page.lang, "en");
        assert_eq!(parsed.reader.default_document, DEFAULT_DOCUMENT);
    }
}

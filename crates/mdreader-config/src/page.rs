//! Page template configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTML page wrapped around a rendered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageConfig {
    /// Emit a full HTML page rather than a bare fragment.
    /// Default: true
    #[serde(default = "default_true")]
    pub standalone: bool,

    /// Value of the `lang` attribute on `<html>`.
    /// Default: "zh-TW"
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Text placed before the document name in `<title>`.
    /// Default: "Markdown Reader"
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            lang: default_lang(),
            title_prefix: default_title_prefix(),
        }
    }
}

impl PageConfig {
    /// Merge another PageConfig into this one.
    pub fn merge(&mut self, other: &PageConfig) {
        self.standalone = other.standalone;
        self.lang = other.lang.clone();
        self.title_prefix = other.title_prefix.clone();
    }
}

fn default_true() -> bool {
    true
}

fn default_lang() -> String {
    "zh-TW".to_string()
}

fn default_title_prefix() -> String {
    "Markdown Reader".to_string()
}

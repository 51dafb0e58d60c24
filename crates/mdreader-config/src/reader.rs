//! Document reader configuration.
//!
//! This module contains the `ReaderConfig` struct which controls where
//! documents are looked up and which one is opened by default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the document opened when none is requested.
pub const DEFAULT_DOCUMENT: &str = "data_dictionary.md";

/// Document lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReaderConfig {
    /// Directory scanned for `.md` documents.
    /// Default: the current directory
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Document opened when no file is named on the command line.
    /// Default: "data_dictionary.md"
    #[serde(default = "default_document")]
    pub default_document: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            default_document: default_document(),
        }
    }
}

impl ReaderConfig {
    /// Merge another ReaderConfig into this one.
    ///
    /// Fields left out of an override file deserialize to their defaults,
    /// so every field is copied from `other`.
    pub fn merge(&mut self, other: &ReaderConfig) {
        self.directory = other.directory.clone();
        self.default_document = other.default_document.clone();
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_document() -> String {
    DEFAULT_DOCUMENT.to_string()
}

//! Error types for mdreader

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mdreader operations.
///
/// Rendering itself never fails; these cover the reader around it.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document directory holds no markdown files
    #[error("No markdown documents found in {}", .0.display())]
    NoDocuments(PathBuf),
}

/// Result type alias for mdreader operations
pub type Result<T> = std::result::Result<T, ReaderError>;

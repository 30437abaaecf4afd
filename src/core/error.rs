//! Error types and error handling for docsplit.
//!
//! One error enum covers configuration, path validation, capability
//! gating and per-file extraction failures. Directory scans record
//! per-file errors in their report instead of returning them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docsplit operations
pub type Result<T> = std::result::Result<T, DocsplitError>;

/// Main error type for docsplit
#[derive(Error, Debug)]
pub enum DocsplitError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Error reading PDF file {}: {message}", path.display())]
    ExtractionFailed { path: PathBuf, message: String },

    #[error("Could not decode {} as {encoding}", path.display())]
    DecodeFailed { path: PathBuf, encoding: String },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocsplitError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Error raised for a PDF request when PDF support is absent
    pub fn pdf_unavailable() -> Self {
        DocsplitError::CapabilityUnavailable(
            "PDF support is not available in this build (enable the `pdf` feature)".to_string(),
        )
    }

    /// Check if the caller supplied something unusable
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DocsplitError::ConfigError(_)
                | DocsplitError::InvalidPath(_)
                | DocsplitError::UnsupportedFileType(_)
        )
    }

    /// Check if this is a missing optional capability
    pub fn is_capability_error(&self) -> bool {
        matches!(self, DocsplitError::CapabilityUnavailable(_))
    }

    /// Check if the error is tied to the contents of one file
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            DocsplitError::ExtractionFailed { .. }
                | DocsplitError::DecodeFailed { .. }
                | DocsplitError::ReadFailed { .. }
        )
    }
}

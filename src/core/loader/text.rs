//! Plain-text loader.
//!
//! Files are decoded strictly: bytes that are malformed for the chosen
//! encoding fail the file instead of being replaced.

use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::LoaderConfig;
use crate::core::error::{DocsplitError, Result};
use crate::core::loader::{has_suffix, FileWalker};
use crate::core::types::LoadReport;

/// Resolve a WHATWG encoding label such as `utf-8` or `latin1`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DocsplitError::ConfigError(format!("Unknown text encoding '{label}'")))
}

/// Read and decode one file.
pub(crate) fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DocsplitError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| DocsplitError::DecodeFailed {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        })
}

/// Loads `.txt` files from a single file or a directory tree.
#[derive(Debug, Clone)]
pub struct TextFileLoader {
    path: PathBuf,
    encoding: &'static Encoding,
    walker: FileWalker,
}

impl TextFileLoader {
    /// Create a UTF-8 loader for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: UTF_8,
            walker: FileWalker::unrestricted(),
        }
    }

    /// Create a loader decoding with the encoding named by `label`.
    pub fn with_encoding(path: impl Into<PathBuf>, label: &str) -> Result<Self> {
        Ok(Self {
            encoding: resolve_encoding(label)?,
            ..Self::new(path)
        })
    }

    /// Create a loader using the `[loader]` configuration section.
    pub fn from_config(path: impl Into<PathBuf>, config: &LoaderConfig) -> Result<Self> {
        Ok(Self::with_encoding(path, &config.encoding)?.with_walker(FileWalker::from_config(config)?))
    }

    /// Replace the directory walker.
    pub fn with_walker(mut self, walker: FileWalker) -> Self {
        self.walker = walker;
        self
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical name of the encoding in use.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Load the configured path.
    ///
    /// A directory is scanned recursively for names ending in `.txt`
    /// (case-sensitive). A single file must itself end in `.txt`.
    pub fn load(&self) -> Result<LoadReport> {
        if self.path.is_dir() {
            self.load_directory()
        } else if self.path.is_file() && has_suffix(&self.path, ".txt", true) {
            let mut report = LoadReport::new();
            report.push_loaded(self.path.clone(), self.load_file()?);
            Ok(report)
        } else {
            Err(DocsplitError::InvalidPath(format!(
                "{} is neither a valid directory nor a .txt file",
                self.path.display()
            )))
        }
    }

    /// Decode the configured path as one document.
    pub fn load_file(&self) -> Result<String> {
        let text = read_text(&self.path, self.encoding)?;
        tracing::debug!("Loaded {:?} ({} bytes)", self.path, text.len());
        Ok(text)
    }

    /// Scan the configured directory for `.txt` files.
    pub fn load_directory(&self) -> Result<LoadReport> {
        let walk = self.walker.collect_files(&self.path)?;
        let mut report = LoadReport::new();
        for (path, error) in walk.errors {
            report.push_failed(path, error);
        }

        for file in walk.files {
            if !has_suffix(&file.path, ".txt", true) {
                continue;
            }
            if let Some(reason) = self.walker.check_size(&file) {
                report.push_skipped(file.path, reason);
                continue;
            }

            match read_text(&file.path, self.encoding) {
                Ok(text) => report.push_loaded(file.path, text),
                Err(e) => report.push_failed(file.path, e),
            }
        }

        tracing::info!(
            "Loaded {} text documents from {:?}",
            report.loaded_count(),
            self.path
        );
        Ok(report)
    }

    /// Load and return the documents only.
    pub fn load_documents(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_documents())
    }
}

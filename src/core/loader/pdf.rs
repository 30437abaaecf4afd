//! PDF loader.
//!
//! Text is extracted page by page with `lopdf` when the `pdf` feature
//! is enabled. Without it every extraction reports the capability as
//! unavailable.

use std::path::{Path, PathBuf};

use crate::core::capabilities::Capabilities;
use crate::core::config::LoaderConfig;
use crate::core::error::{DocsplitError, Result};
use crate::core::loader::{has_suffix, FileWalker};
use crate::core::types::LoadReport;

/// Extract the text of every page, in page order.
///
/// Each page is followed by a newline and the result is trimmed.
#[cfg(feature = "pdf")]
pub(crate) fn extract_pdf_text(path: &Path) -> Result<String> {
    let wrap = |e: lopdf::Error| DocsplitError::ExtractionFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let document = lopdf::Document::load(path).map_err(wrap)?;
    let pages = document.get_pages();

    let mut text = String::new();
    for page_number in pages.keys() {
        let page_text = document.extract_text(&[*page_number]).map_err(wrap)?;
        text.push_str(&page_text);
        text.push('\n');
    }

    tracing::debug!("Extracted {} pages from {:?}", pages.len(), path);
    Ok(text.trim().to_string())
}

#[cfg(not(feature = "pdf"))]
pub(crate) fn extract_pdf_text(path: &Path) -> Result<String> {
    let _ = path;
    Err(DocsplitError::pdf_unavailable())
}

/// Loads `.pdf` files from a single file or a directory tree.
#[derive(Debug, Clone)]
pub struct PdfFileLoader {
    path: PathBuf,
    walker: FileWalker,
}

impl PdfFileLoader {
    /// Create a loader for `path`.
    ///
    /// # Errors
    ///
    /// `CapabilityUnavailable` when PDF support is not present.
    pub fn new(path: impl Into<PathBuf>, capabilities: &Capabilities) -> Result<Self> {
        if !capabilities.pdf_available() {
            return Err(DocsplitError::pdf_unavailable());
        }

        Ok(Self {
            path: path.into(),
            walker: FileWalker::unrestricted(),
        })
    }

    /// Create a loader using the `[loader]` configuration section.
    pub fn from_config(
        path: impl Into<PathBuf>,
        config: &LoaderConfig,
        capabilities: &Capabilities,
    ) -> Result<Self> {
        Ok(Self::new(path, capabilities)?.with_walker(FileWalker::from_config(config)?))
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

    /// Load the configured path.
    ///
    /// `.pdf` is matched case-insensitively for both directories and
    /// single files.
    pub fn load(&self) -> Result<LoadReport> {
        if self.path.is_dir() {
            self.load_directory()
        } else if self.path.is_file() && has_suffix(&self.path, ".pdf", false) {
            let mut report = LoadReport::new();
            report.push_loaded(self.path.clone(), self.load_file()?);
            Ok(report)
        } else {
            Err(DocsplitError::InvalidPath(format!(
                "{} is neither a valid directory nor a .pdf file",
                self.path.display()
            )))
        }
    }

    /// Extract the configured path as one document.
    pub fn load_file(&self) -> Result<String> {
        extract_pdf_text(&self.path)
    }

    /// Scan the configured directory for `.pdf` files.
    pub fn load_directory(&self) -> Result<LoadReport> {
        let walk = self.walker.collect_files(&self.path)?;
        let mut report = LoadReport::new();
        for (path, error) in walk.errors {
            report.push_failed(path, error);
        }

        for file in walk.files {
            if !has_suffix(&file.path, ".pdf", false) {
                continue;
            }
            if let Some(reason) = self.walker.check_size(&file) {
                report.push_skipped(file.path, reason);
                continue;
            }

            match extract_pdf_text(&file.path) {
                Ok(text) => report.push_loaded(file.path, text),
                Err(e) => report.push_failed(file.path, e),
            }
        }

        tracing::info!(
            "Loaded {} PDF documents from {:?}",
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

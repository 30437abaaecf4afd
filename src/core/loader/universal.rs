//! Extension-dispatching loader over text and PDF files.

use encoding_rs::{Encoding, UTF_8};
use std::path::{Path, PathBuf};

use crate::core::capabilities::Capabilities;
use crate::core::config::LoaderConfig;
use crate::core::error::{DocsplitError, Result};
use crate::core::loader::pdf::extract_pdf_text;
use crate::core::loader::text::{read_text, resolve_encoding};
use crate::core::loader::{has_suffix, DocumentKind, FileWalker};
use crate::core::types::{LoadReport, SkipReason};

/// Loads every supported document under a path.
///
/// A single file must be `.txt` or `.pdf`. `.pdf` matches in any case;
/// `.txt` follows [`TextFileLoader`](super::TextFileLoader) and must be
/// lowercase, so `NOTES.TXT` is rejected. A directory scan never aborts
/// because of one file: unsupported files are recorded as skipped and
/// failures (including missing PDF support) as failed.
#[derive(Debug, Clone)]
pub struct UniversalDocumentLoader {
    path: PathBuf,
    encoding: &'static Encoding,
    capabilities: Capabilities,
    walker: FileWalker,
}

impl UniversalDocumentLoader {
    /// Create a UTF-8 loader using the capabilities of this build.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: UTF_8,
            capabilities: Capabilities::detect(),
            walker: FileWalker::unrestricted(),
        }
    }

    /// Create a loader decoding text files with the encoding named by `label`.
    pub fn with_encoding(path: impl Into<PathBuf>, label: &str) -> Result<Self> {
        Ok(Self {
            encoding: resolve_encoding(label)?,
            ..Self::new(path)
        })
    }

    /// Create a loader using the `[loader]` configuration section.
    pub fn from_config(
        path: impl Into<PathBuf>,
        config: &LoaderConfig,
        capabilities: Capabilities,
    ) -> Result<Self> {
        Ok(Self::with_encoding(path, &config.encoding)?
            .with_capabilities(capabilities)
            .with_walker(FileWalker::from_config(config)?))
    }

    /// Replace the injected capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
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
    pub fn load(&self) -> Result<LoadReport> {
        if self.path.is_dir() {
            self.load_directory()
        } else if self.path.is_file() {
            let mut report = LoadReport::new();
            report.push_loaded(self.path.clone(), self.load_file()?);
            Ok(report)
        } else {
            Err(DocsplitError::InvalidPath(format!(
                "{} is neither a valid directory nor a supported file",
                self.path.display()
            )))
        }
    }

    /// Load the configured path as a single document.
    pub fn load_file(&self) -> Result<String> {
        match DocumentKind::from_path(&self.path) {
            Some(kind) => self.load_one(kind, &self.path),
            None => Err(DocsplitError::UnsupportedFileType(self.path.clone())),
        }
    }

    /// Scan the configured directory for every supported file.
    pub fn load_directory(&self) -> Result<LoadReport> {
        let walk = self.walker.collect_files(&self.path)?;
        let mut report = LoadReport::new();
        for (path, error) in walk.errors {
            report.push_failed(path, error);
        }

        for file in walk.files {
            let Some(kind) = DocumentKind::from_path(&file.path) else {
                report.push_skipped(file.path, SkipReason::UnsupportedExtension);
                continue;
            };
            if let Some(reason) = self.walker.check_size(&file) {
                report.push_skipped(file.path, reason);
                continue;
            }

            match self.load_one(kind, &file.path) {
                Ok(text) => report.push_loaded(file.path, text),
                Err(e) => report.push_failed(file.path, e),
            }
        }

        tracing::info!(
            "Loaded {} documents from {:?} ({} skipped, {} failed)",
            report.loaded_count(),
            self.path,
            report.skipped().count(),
            report.failures().count()
        );
        Ok(report)
    }

    /// Load and return the documents only.
    pub fn load_documents(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_documents())
    }

    fn load_one(&self, kind: DocumentKind, path: &Path) -> Result<String> {
        match kind {
            // Text goes through the `.txt` rules, which match case-sensitively
            DocumentKind::Text if !has_suffix(path, ".txt", true) => {
                Err(DocsplitError::InvalidPath(format!(
                    "{} is neither a valid directory nor a .txt file",
                    path.display()
                )))
            }
            DocumentKind::Text => read_text(path, self.encoding),
            DocumentKind::Pdf => {
                if !self.capabilities.pdf_available() {
                    return Err(DocsplitError::pdf_unavailable());
                }
                extract_pdf_text(path)
            }
        }
    }
}

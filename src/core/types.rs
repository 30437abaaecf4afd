//! Domain data structures returned by the loaders.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::error::DocsplitError;

/// Why a file seen during a directory scan was not loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Extension is not handled by the loader
    UnsupportedExtension,
    /// File exceeds the configured size ceiling
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedExtension => write!(f, "unsupported file type"),
            SkipReason::TooLarge {
                size_bytes,
                limit_bytes,
            } => write!(f, "file too large ({size_bytes} > {limit_bytes} bytes)"),
        }
    }
}

/// Outcome of one file during a scan
#[derive(Debug)]
pub enum FileOutcome {
    /// Loaded as one document of `chars` characters
    Loaded { chars: usize },
    Skipped(SkipReason),
    Failed(DocsplitError),
}

impl FileOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FileOutcome::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }
}

/// A file visited by a loader, paired with what happened to it
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Documents produced by one `load()` call plus per-file outcomes.
///
/// `documents` holds one entry per `Loaded` report, in the same order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub documents: Vec<String>,
    pub files: Vec<FileReport>,
}

impl LoadReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully loaded document
    pub fn push_loaded(&mut self, path: PathBuf, document: String) {
        let chars = document.chars().count();
        self.documents.push(document);
        self.files.push(FileReport {
            path,
            outcome: FileOutcome::Loaded { chars },
        });
    }

    /// Record a file that was deliberately passed over
    pub fn push_skipped(&mut self, path: PathBuf, reason: SkipReason) {
        tracing::debug!("Skipping {:?}: {}", path, reason);
        self.files.push(FileReport {
            path,
            outcome: FileOutcome::Skipped(reason),
        });
    }

    /// Record a per-file failure; the scan carries on
    pub fn push_failed(&mut self, path: PathBuf, error: DocsplitError) {
        tracing::warn!("Could not load file {:?}: {}", path, error);
        self.files.push(FileReport {
            path,
            outcome: FileOutcome::Failed(error),
        });
    }

    /// Number of documents loaded
    pub fn loaded_count(&self) -> usize {
        self.documents.len()
    }

    /// Files that failed to load
    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &DocsplitError)> {
        self.files.iter().filter_map(|report| match &report.outcome {
            FileOutcome::Failed(error) => Some((&report.path, error)),
            _ => None,
        })
    }

    /// Files that were skipped
    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, &SkipReason)> {
        self.files.iter().filter_map(|report| match &report.outcome {
            FileOutcome::Skipped(reason) => Some((&report.path, reason)),
            _ => None,
        })
    }

    /// True when at least one file failed
    pub fn is_partial(&self) -> bool {
        self.files.iter().any(|report| report.outcome.is_failed())
    }

    /// Drop the per-file outcomes and keep the documents
    pub fn into_documents(self) -> Vec<String> {
        self.documents
    }
}

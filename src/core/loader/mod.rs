//! Document loaders.
//!
//! Each loader takes a path that is either a single file or a
//! directory tree and returns the decoded documents:
//!
//! - [`TextFileLoader`]: `.txt` files (case-sensitive suffix)
//! - [`PdfFileLoader`]: `.pdf` files, page text joined by newlines
//! - [`UniversalDocumentLoader`]: dispatches on extension
//!
//! Loading a single named file propagates its error. Directory scans
//! are best-effort: per-file failures are recorded in the returned
//! [`LoadReport`](crate::core::types::LoadReport), logged, and the
//! walk continues.

pub mod pdf;
pub mod text;
pub mod universal;
pub mod walker;

pub use pdf::PdfFileLoader;
pub use text::TextFileLoader;
pub use universal::UniversalDocumentLoader;
pub use walker::{FileWalker, Walk, WalkedFile};

use std::path::Path;

/// File formats the loaders understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    /// Classify a path by extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        if has_suffix(path, ".txt", false) {
            Some(DocumentKind::Text)
        } else if has_suffix(path, ".pdf", false) {
            Some(DocumentKind::Pdf)
        } else {
            None
        }
    }
}

/// Check the file name against a lowercase suffix such as `.txt`
pub(crate) fn has_suffix(path: &Path, suffix: &str, case_sensitive: bool) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if case_sensitive {
        name.ends_with(suffix)
    } else {
        name.to_lowercase().ends_with(suffix)
    }
}

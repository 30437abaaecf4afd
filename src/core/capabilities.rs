//! Optional capability detection.
//!
//! PDF parsing is compiled in through the `pdf` cargo feature. The
//! result is resolved once at startup and handed to the loaders, which
//! query it before dispatching instead of discovering the gap mid-load.

use serde::Serialize;

/// Optional capabilities available to the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Whether PDF text extraction is available.
    pub pdf: bool,
}

impl Capabilities {
    /// Detect the capabilities of the current build.
    pub fn detect() -> Self {
        let caps = Self {
            pdf: cfg!(feature = "pdf"),
        };
        tracing::debug!(pdf = caps.pdf, "Resolved loader capabilities");
        caps
    }

    /// Capabilities with every optional format disabled.
    pub fn text_only() -> Self {
        Self { pdf: false }
    }

    /// Whether PDF loading can be dispatched.
    pub fn pdf_available(&self) -> bool {
        self.pdf
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

//! docsplit - document loading and chunking for RAG pipelines
//!
//! Loads plain-text and PDF documents from files or directory trees
//! and splits them into fixed-size overlapping chunks ready for
//! embedding or indexing.
//!
//! # Architecture
//!
//! - **core**: Domain logic (usable as a library)
//!   - loader (text, PDF, universal dispatch, directory walking)
//!   - splitter (character windows with overlap)
//!   - config, error, types, xdg, capabilities, services
//!
//! - **cli**: clap adapter for the `docsplit` binary
//!
//! # Example
//!
//! ```no_run
//! use docsplit::{CharacterTextSplitter, UniversalDocumentLoader};
//!
//! let documents = UniversalDocumentLoader::new("data/")
//!     .load_documents()
//!     .unwrap();
//! let chunks = CharacterTextSplitter::default().split_texts(&documents);
//! println!("{} chunks", chunks.len());
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::capabilities::Capabilities;
pub use core::config::Config;
pub use core::error::{DocsplitError, Result};
pub use core::loader::{FileWalker, PdfFileLoader, TextFileLoader, UniversalDocumentLoader};
pub use core::services::Services;
pub use core::splitter::CharacterTextSplitter;
pub use core::types::{FileOutcome, FileReport, LoadReport, SkipReason};

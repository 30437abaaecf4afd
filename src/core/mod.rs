//! Core domain logic (interface-agnostic)
//!
//! Everything here is usable as a library without the CLI.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Load reports and per-file outcomes
//! - **xdg**: XDG directory handling
//! - **capabilities**: Optional format support resolved at startup
//! - **loader**: Text, PDF and extension-dispatching loaders
//! - **splitter**: Overlapping character chunking
//! - **services**: Shared service container

pub mod capabilities;
pub mod config;
pub mod error;
pub mod loader;
pub mod services;
pub mod splitter;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use capabilities::Capabilities;
pub use config::Config;
pub use error::{DocsplitError, Result};
pub use services::Services;

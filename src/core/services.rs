//! Shared service container for docsplit
//!
//! Holds the configuration and capabilities resolved once at startup
//! and builds loaders and splitters from them.

use crate::core::capabilities::Capabilities;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::loader::UniversalDocumentLoader;
use crate::core::splitter::CharacterTextSplitter;
use std::path::PathBuf;
use std::sync::Arc;

/// Services container
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Optional capabilities of this build
    pub capabilities: Capabilities,
}

impl Services {
    /// Create services from configuration, detecting capabilities
    pub fn new(config: Config) -> Self {
        Self::with_capabilities(config, Capabilities::detect())
    }

    /// Create services with explicit capabilities
    pub fn with_capabilities(config: Config, capabilities: Capabilities) -> Self {
        Self {
            config: Arc::new(config),
            capabilities,
        }
    }

    /// Create a universal loader with an optional encoding override
    pub fn create_loader(
        &self,
        path: impl Into<PathBuf>,
        encoding: Option<&str>,
    ) -> Result<UniversalDocumentLoader> {
        let mut loader_config = self.config.loader.clone();
        if let Some(label) = encoding {
            loader_config.encoding = label.to_string();
        }

        UniversalDocumentLoader::from_config(path, &loader_config, self.capabilities)
    }

    /// Create a splitter, letting request values override the configuration
    pub fn create_splitter(
        &self,
        chunk_size: Option<usize>,
        chunk_overlap: Option<usize>,
    ) -> Result<CharacterTextSplitter> {
        CharacterTextSplitter::new(
            chunk_size.unwrap_or(self.config.splitter.chunk_size),
            chunk_overlap.unwrap_or(self.config.splitter.chunk_overlap),
        )
    }
}

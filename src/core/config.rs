//! Configuration management for docsplit.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsplitError, Result};
use crate::core::loader::text::resolve_encoding;
use crate::core::splitter::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Splitter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitterConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

/// Loader configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Encoding label for text files (WHATWG labels, e.g. "utf-8", "latin1")
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Maximum file size in MB (skip larger files during directory scans)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Directory trees to prune during scans (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

// Default value functions
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_chunk_overlap() -> usize {
    DEFAULT_CHUNK_OVERLAP
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_max_file_size() -> usize {
    64
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/.svn/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/__pycache__/**".to_string(),
    ]
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            max_file_size_mb: default_max_file_size(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsplitError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        xdg.log_paths();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCSPLIT_CONFIG env var
    /// 2. XDG config file (~/.config/docsplit/config.toml)
    /// 3. ./docsplit.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSPLIT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docsplit.toml").exists() {
                Self::from_file("docsplit.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("DOCSPLIT_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.splitter.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("DOCSPLIT_CHUNK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.splitter.chunk_overlap = o;
            }
        }

        if let Ok(encoding) = env::var("DOCSPLIT_ENCODING") {
            if !encoding.trim().is_empty() {
                self.loader.encoding = encoding;
            }
        }
        if let Ok(max_size) = env::var("DOCSPLIT_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.loader.max_file_size_mb = size;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.splitter.chunk_size == 0 {
            return Err(DocsplitError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.splitter.chunk_overlap >= self.splitter.chunk_size {
            return Err(DocsplitError::ConfigError(
                "Chunk overlap must be less than chunk size".to_string(),
            ));
        }

        if self.loader.max_file_size_mb == 0 {
            return Err(DocsplitError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        resolve_encoding(&self.loader.encoding)?;

        for pattern in &self.loader.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                DocsplitError::ConfigError(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.splitter.chunk_size);
        tracing::info!("  Chunk overlap: {} chars", self.splitter.chunk_overlap);
        tracing::info!("  Encoding: {}", self.loader.encoding);
        tracing::info!("  Max file size: {} MB", self.loader.max_file_size_mb);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.loader.exclude_patterns.len()
        );
    }
}

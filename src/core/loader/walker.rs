//! Recursive directory walker shared by the loaders.
//!
//! Traverses directory trees with no depth limit, prunes excluded
//! directories and reports file sizes so callers can enforce the
//! size ceiling. Walk errors (permission denied, etc.) are logged and
//! returned alongside the files so loaders can report them.

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::LoaderConfig;
use crate::core::error::{DocsplitError, Result};
use crate::core::types::SkipReason;

/// A regular file found during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Result of walking one root
#[derive(Debug, Default)]
pub struct Walk {
    /// Files in walk order
    pub files: Vec<WalkedFile>,
    /// Entries that could not be read, with the cause
    pub errors: Vec<(PathBuf, DocsplitError)>,
}

/// File system walker with exclude patterns and a size ceiling
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Patterns to exclude (e.g., "**/.git/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (larger files are reported, not read)
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `exclude_patterns` - Glob patterns for paths to prune
    /// * `max_file_size_mb` - Maximum file size in megabytes
    ///
    /// # Returns
    ///
    /// A new `FileWalker` or a `ConfigError` if a pattern is invalid
    pub fn new(exclude_patterns: Vec<String>, max_file_size_mb: usize) -> Result<Self> {
        let exclude = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    DocsplitError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            exclude_patterns: exclude,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Walker with no exclusions and no size ceiling
    pub fn unrestricted() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            max_file_size_bytes: u64::MAX,
        }
    }

    /// Build a walker from the `[loader]` configuration section
    pub fn from_config(config: &LoaderConfig) -> Result<Self> {
        Self::new(config.exclude_patterns.clone(), config.max_file_size_mb)
    }

    /// Collect every file below `root`.
    ///
    /// Entries are sorted by file name within each directory, so the
    /// order is stable across runs. Symlinks to files are listed and read
    /// through the link; symlinked directories are not descended into.
    pub fn collect_files(&self, root: &Path) -> Result<Walk> {
        if !root.is_dir() {
            return Err(DocsplitError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut walk = Walk::default();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    let size_bytes = if file_type.is_file() {
                        entry.metadata().map(|m| m.len()).unwrap_or(0)
                    } else if file_type.is_symlink() {
                        match fs::metadata(entry.path()) {
                            Ok(meta) if meta.is_file() => meta.len(),
                            Ok(_) => continue,
                            // Dangling link: the read fails later and is reported per file
                            Err(_) => 0,
                        }
                    } else {
                        continue;
                    };

                    walk.files.push(WalkedFile {
                        path: entry.into_path(),
                        size_bytes,
                    });
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    walk.errors.push((
                        path.clone(),
                        DocsplitError::ReadFailed {
                            path,
                            source: e.into(),
                        },
                    ));
                }
            }
        }

        tracing::debug!(
            "Collected {} files under {:?} ({} walk errors)",
            walk.files.len(),
            root,
            walk.errors.len()
        );
        Ok(walk)
    }

    /// Report files over the size ceiling
    pub fn check_size(&self, file: &WalkedFile) -> Option<SkipReason> {
        if file.size_bytes > self.max_file_size_bytes {
            Some(SkipReason::TooLarge {
                size_bytes: file.size_bytes,
                limit_bytes: self.max_file_size_bytes,
            })
        } else {
            None
        }
    }

    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        for pattern in &self.exclude_patterns {
            if pattern.matches_path(path) {
                tracing::debug!("Skipping excluded path: {:?}", path);
                return false;
            }
        }

        true
    }
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::unrestricted()
    }
}

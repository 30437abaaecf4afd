//! Fixed-size character splitting with overlap.
//!
//! Windows are measured in **characters**, not bytes. Boundaries are
//! taken from `char_indices()` so a chunk never ends inside a
//! multi-byte UTF-8 sequence.
//!
//! # Example
//!
//! ```
//! use docsplit::CharacterTextSplitter;
//!
//! let splitter = CharacterTextSplitter::new(10, 5).unwrap();
//! let chunks = splitter.split("abcdefghijklmnopqrstuvw");
//!
//! assert_eq!(chunks.len(), 5);
//! assert_eq!(chunks[1], "fghijklmno");
//! assert_eq!(chunks[4], "uvw");
//! ```

use crate::core::config::SplitterConfig;
use crate::core::error::{DocsplitError, Result};

/// Default number of characters per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default number of characters shared by consecutive chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Splits text into fixed-size overlapping chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTextSplitter {
    /// Maximum characters per chunk
    chunk_size: usize,

    /// Characters shared between consecutive chunks
    chunk_overlap: usize,
}

impl CharacterTextSplitter {
    /// Create a new splitter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` unless `chunk_size > chunk_overlap`.
    /// A zero-stride window would never advance.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size <= chunk_overlap {
            return Err(DocsplitError::ConfigError(format!(
                "Chunk size ({chunk_size}) must be greater than chunk overlap ({chunk_overlap})"
            )));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Build a splitter from the `[splitter]` configuration section.
    pub fn from_config(config: &SplitterConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap in characters.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Distance between the start offsets of consecutive chunks.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }

    /// Split one text into overlapping chunks.
    ///
    /// Chunk `k` covers characters `[k * stride, k * stride + chunk_size)`,
    /// truncated at the end of the text. Empty input yields a single
    /// empty chunk.
    pub fn split(&self, text: &str) -> Vec<String> {
        // Byte offset of every character start
        let boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();

        if boundaries.is_empty() {
            return vec![String::new()];
        }

        let total_chars = boundaries.len();
        let stride = self.stride();
        let mut chunks = Vec::with_capacity(total_chars.div_ceil(stride));
        let mut char_start = 0;

        while char_start < total_chars {
            let char_end = char_start.saturating_add(self.chunk_size).min(total_chars);

            let byte_start = boundaries[char_start];
            let byte_end = if char_end < total_chars {
                boundaries[char_end]
            } else {
                text.len()
            };

            chunks.push(text[byte_start..byte_end].to_string());
            char_start += stride;
        }

        chunks
    }

    /// Split every text in order and flatten the results.
    ///
    /// Document boundaries are not preserved in the output.
    pub fn split_texts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let chunks: Vec<String> = texts
            .iter()
            .flat_map(|text| self.split(text.as_ref()))
            .collect();

        tracing::debug!(
            documents = texts.len(),
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            chunk_overlap = self.chunk_overlap,
            "Split documents"
        );

        chunks
    }
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

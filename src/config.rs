//! Configuration for the checksum engine.
//!
//! - [`EngineConfig`] - Chunk size used to segment the source.

use crate::error::ChecksumError;

/// Default chunk size (64 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Configuration for chunked checksum computation.
///
/// The only tunable is the chunk size: the source is read in segments of at
/// most this many bytes, each folded into the digest in order. The digest
/// itself is insensitive to the segmentation, so the chunk size trades peak
/// memory against the number of read suspensions.
///
/// # Example
///
/// ```
/// use chunksum::EngineConfig;
///
/// let config = EngineConfig::new(8 * 1024 * 1024)?;
/// assert_eq!(config.chunk_size(), 8 * 1024 * 1024);
/// # Ok::<(), chunksum::ChecksumError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    chunk_size: usize,
}

impl EngineConfig {
    /// Creates a new configuration.
    ///
    /// Returns [`ChecksumError::InvalidConfig`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self, ChecksumError> {
        if chunk_size == 0 {
            return Err(ChecksumError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }
        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Returns the chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChecksumError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

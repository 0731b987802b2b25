//! Error types for chunksum.

use std::fmt;

/// Errors that can occur while computing a checksum.
#[derive(Debug)]
pub enum ChecksumError {
    /// The requested digest algorithm is not in the supported set.
    ///
    /// Raised when resolving an algorithm name, before any read is attempted.
    UnsupportedAlgorithm {
        /// The name that failed to resolve.
        name: String,
    },

    /// Reading a chunk from the source failed.
    ///
    /// The whole computation is aborted; no digest is produced.
    Read {
        /// Index of the chunk whose read failed.
        index: u64,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl ChecksumError {
    /// Wraps an I/O error as a failed read of the given chunk.
    pub(crate) fn read(index: u64, source: std::io::Error) -> Self {
        ChecksumError::Read { index, source }
    }
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumError::UnsupportedAlgorithm { name } => {
                write!(f, "unsupported algorithm: {}", name)
            }
            ChecksumError::Read { index, source } => {
                write!(f, "read of chunk {} failed: {}", index, source)
            }
            ChecksumError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ChecksumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChecksumError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

//! Checksum result type.
//!
//! - [`Checksum`] - A finalized digest bound to the algorithm that produced it.

use std::fmt;
use std::hash::{Hash as StdHash, Hasher};

use crate::algorithm::Algorithm;

/// Largest digest length across the supported algorithms (SHA-256, 32 bytes).
pub const MAX_DIGEST_LEN: usize = 32;

/// A finalized checksum.
///
/// Holds the digest bytes inline (no heap allocation) together with the
/// algorithm that produced them. The digest length is fixed per algorithm:
/// 16 bytes for MD5, 20 for SHA-1, 32 for SHA-256.
///
/// # Example
///
/// ```
/// use chunksum::{Algorithm, Checksummer, EngineConfig};
///
/// let engine = Checksummer::new(EngineConfig::default());
/// let checksum = engine.checksum_bytes(Algorithm::Md5, &b"hello world"[..]);
///
/// assert_eq!(checksum.to_hex(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
/// assert_eq!(checksum.algorithm(), Algorithm::Md5);
/// ```
#[derive(Clone, Copy)]
pub struct Checksum {
    algorithm: Algorithm,
    buffer: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Checksum {
    /// Creates a checksum from finalized digest bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` does not match the algorithm's digest length.
    pub fn new(algorithm: Algorithm, bytes: &[u8]) -> Self {
        assert_eq!(
            bytes.len(),
            algorithm.digest_len(),
            "digest length {} does not match {} ({} bytes)",
            bytes.len(),
            algorithm,
            algorithm.digest_len()
        );
        let mut buffer = [0u8; MAX_DIGEST_LEN];
        buffer[..bytes.len()].copy_from_slice(bytes);
        Self {
            algorithm,
            buffer,
            len: bytes.len(),
        }
    }

    /// Returns the algorithm that produced this checksum.
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Returns the digest length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the digest is empty (never, for supported algorithms).
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Renders the digest as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parses a checksum from a hexadecimal string.
    ///
    /// Returns `None` if the string is not valid hex or does not decode to
    /// the algorithm's digest length. Uppercase input is accepted.
    pub fn from_hex(algorithm: Algorithm, hex_str: &str) -> Option<Self> {
        let bytes = hex::decode(hex_str).ok()?;
        if bytes.len() != algorithm.digest_len() {
            return None;
        }
        Some(Self::new(algorithm, &bytes))
    }
}

impl AsRef<[u8]> for Checksum {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Checksum {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Checksum {}

impl StdHash for Checksum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.algorithm.hash(state);
        state.write(self.as_bytes());
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({}:{})", self.algorithm, self.to_hex())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

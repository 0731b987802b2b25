//! Digest algorithm selection.
//!
//! - [`Algorithm`] - The closed set of supported digest algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::ChecksumError;

/// The supported digest algorithms.
///
/// The set is closed and exhaustively matchable; selecting an algorithm
/// outside it is rejected at the name-resolution boundary, before any
/// source bytes are read.
///
/// # Example
///
/// ```
/// use chunksum::Algorithm;
///
/// let algorithm = Algorithm::from_name("sha-256")?;
/// assert_eq!(algorithm, Algorithm::Sha256);
/// assert_eq!(algorithm.digest_len(), 32);
/// # Ok::<(), chunksum::ChecksumError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD5 (128-bit digest).
    Md5,
    /// SHA-1 (160-bit digest).
    Sha1,
    /// SHA-256 (256-bit digest).
    Sha256,
}

impl Algorithm {
    /// Returns the canonical lowercase name for the algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
        }
    }

    /// Returns the digest length in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }

    /// Returns the length of the rendered lowercase-hex digest.
    pub const fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Resolves an algorithm from a name.
    ///
    /// Accepts canonical names and common aliases, case-insensitive.
    /// Anything outside the supported set yields
    /// [`ChecksumError::UnsupportedAlgorithm`].
    pub fn from_name(name: &str) -> Result<Self, ChecksumError> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            _ => Err(ChecksumError::UnsupportedAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Returns all supported algorithms.
    pub const fn all() -> &'static [Self] {
        &[Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::Md5.name(), "md5");
        assert_eq!(Algorithm::Sha1.name(), "sha1");
        assert_eq!(Algorithm::Sha256.name(), "sha256");
    }

    #[test]
    fn test_digest_len() {
        assert_eq!(Algorithm::Md5.digest_len(), 16);
        assert_eq!(Algorithm::Sha1.digest_len(), 20);
        assert_eq!(Algorithm::Sha256.digest_len(), 32);
    }

    #[test]
    fn test_hex_len() {
        assert_eq!(Algorithm::Md5.hex_len(), 32);
        assert_eq!(Algorithm::Sha1.hex_len(), 40);
        assert_eq!(Algorithm::Sha256.hex_len(), 64);
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Algorithm::from_name("MD5").unwrap(), Algorithm::Md5);
        assert_eq!(Algorithm::from_name("sha-1").unwrap(), Algorithm::Sha1);
        assert_eq!(Algorithm::from_name("SHA-256").unwrap(), Algorithm::Sha256);
    }

    #[test]
    fn test_from_name_unsupported() {
        let err = Algorithm::from_name("md4").unwrap_err();
        match err {
            ChecksumError::UnsupportedAlgorithm { name } => assert_eq!(name, "md4"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_str() {
        let algorithm: Algorithm = "sha256".parse().unwrap();
        assert_eq!(algorithm, Algorithm::Sha256);
        assert!("blake3".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_all_is_closed_set() {
        let all = Algorithm::all();
        assert_eq!(all.len(), 3);
        for algorithm in all {
            assert_eq!(Algorithm::from_name(algorithm.name()).unwrap(), *algorithm);
        }
    }
}

//! Incremental digest dispatch over the supported algorithms.
//!
//! Internal: the accumulator is created fresh per computation and consumed
//! by `finalize`, so a second finalize or an update after finalize is
//! rejected by the compiler rather than detected at run time.

use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;

use crate::algorithm::Algorithm;
use crate::checksum::Checksum;

/// Stateful digest accumulator for one computation.
///
/// Chunk bytes must be fed in plan order, each exactly once; the digest
/// state has no way to detect reordering.
pub(crate) enum Accumulator {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Accumulator {
    /// Creates a fresh accumulator for the selected algorithm.
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Accumulator::Md5(Md5::new()),
            Algorithm::Sha1 => Accumulator::Sha1(Sha1::new()),
            Algorithm::Sha256 => Accumulator::Sha256(Sha256::new()),
        }
    }

    /// Folds one chunk's bytes into the digest state.
    ///
    /// An empty slice is a no-op, which is what makes the plan's trailing
    /// empty chunk harmless.
    pub(crate) fn update(&mut self, data: &[u8]) {
        match self {
            Accumulator::Md5(hasher) => hasher.update(data),
            Accumulator::Sha1(hasher) => hasher.update(data),
            Accumulator::Sha256(hasher) => hasher.update(data),
        }
    }

    /// Finalizes the digest, consuming the accumulator.
    pub(crate) fn finalize(self) -> Checksum {
        match self {
            Accumulator::Md5(hasher) => {
                let digest = hasher.finalize();
                Checksum::new(Algorithm::Md5, digest.as_slice())
            }
            Accumulator::Sha1(hasher) => {
                let digest = hasher.finalize();
                Checksum::new(Algorithm::Sha1, digest.as_slice())
            }
            Accumulator::Sha256(hasher) => {
                let digest = hasher.finalize();
                Checksum::new(Algorithm::Sha256, digest.as_slice())
            }
        }
    }
}

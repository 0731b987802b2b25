//! The checksum orchestrator.

use std::io::{Read, Seek, SeekFrom};

use bytes::Bytes;

use crate::algorithm::Algorithm;
use crate::checksum::Checksum;
use crate::config::EngineConfig;
use crate::digest::Accumulator;
use crate::engine::iter::ChunkIter;
use crate::error::ChecksumError;
use crate::plan::ChunkPlan;

/// The checksum engine.
///
/// `Checksummer` holds a configuration and runs complete computations: plan
/// the chunks, read them strictly in order, fold each into a fresh digest
/// accumulator, finalize once, and return the result. A checksum is either
/// correct over the whole source or not produced at all - any read failure
/// aborts the computation with the failing chunk index.
///
/// Chunk reads are strictly sequential: chunk `i + 1` is not read until
/// chunk `i` has been folded into the accumulator. The accumulator is a
/// single mutable resource and chunk order is semantically required, so
/// there is nothing to parallelize without switching to a different digest
/// construction.
///
/// # Example
///
/// ```
/// use chunksum::{Algorithm, Checksummer, EngineConfig};
///
/// let engine = Checksummer::new(EngineConfig::default());
/// let checksum = engine.checksum_bytes(Algorithm::Sha256, &b"hello world"[..]);
///
/// assert_eq!(
///     checksum.to_hex(),
///     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checksummer {
    config: EngineConfig,
}

impl Checksummer {
    /// Creates a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this engine.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Creates a chunk iterator over a reader for a source of `len` bytes.
    ///
    /// This exposes the chunk-delivery driver directly; most callers want
    /// [`checksum`](Self::checksum) or
    /// [`checksum_with_len`](Self::checksum_with_len) instead.
    pub fn chunks<R: Read>(&self, len: u64, reader: R) -> ChunkIter<R> {
        ChunkIter::new(reader, ChunkPlan::new(len, self.config.chunk_size()))
    }

    /// Computes the checksum of a seekable source.
    ///
    /// The source length is discovered by seeking to the end; the reader is
    /// then rewound and consumed from the start. Failures while probing the
    /// length surface as a read failure at chunk 0.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use chunksum::{Algorithm, Checksummer, EngineConfig};
    ///
    /// let file = File::open("data.bin")?;
    /// let engine = Checksummer::new(EngineConfig::default());
    /// let checksum = engine.checksum(Algorithm::Sha256, file)?;
    /// println!("{checksum}");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checksum<R: Read + Seek>(
        &self,
        algorithm: Algorithm,
        mut reader: R,
    ) -> Result<Checksum, ChecksumError> {
        let len = reader
            .seek(SeekFrom::End(0))
            .map_err(|e| ChecksumError::read(0, e))?;
        reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| ChecksumError::read(0, e))?;
        self.checksum_with_len(algorithm, len, reader)
    }

    /// Computes the checksum of a reader whose length is already known.
    ///
    /// The reader must be positioned at the start of the source and must
    /// deliver at least `len` bytes; anything past `len` is never read.
    pub fn checksum_with_len<R: Read>(
        &self,
        algorithm: Algorithm,
        len: u64,
        reader: R,
    ) -> Result<Checksum, ChecksumError> {
        let mut accumulator = Accumulator::new(algorithm);
        for chunk in self.chunks(len, reader) {
            let chunk = chunk?;
            accumulator.update(chunk.data());
        }
        Ok(accumulator.finalize())
    }

    /// Computes the checksum of an in-memory buffer.
    ///
    /// Segmentation still follows the plan, so this is also the reference
    /// path for verifying that chunking does not change the digest.
    ///
    /// # Example
    ///
    /// ```
    /// use chunksum::{Algorithm, Checksummer, EngineConfig};
    ///
    /// let engine = Checksummer::new(EngineConfig::default());
    /// let checksum = engine.checksum_bytes(Algorithm::Md5, &b""[..]);
    /// assert_eq!(checksum.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    /// ```
    pub fn checksum_bytes(&self, algorithm: Algorithm, data: impl Into<Bytes>) -> Checksum {
        let data = data.into();
        let plan = ChunkPlan::new(data.len() as u64, self.config.chunk_size());

        let mut accumulator = Accumulator::new(algorithm);
        for range in plan {
            accumulator.update(&data[range.start as usize..range.end as usize]);
        }
        accumulator.finalize()
    }
}

impl Default for Checksummer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

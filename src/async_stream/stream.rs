//! Async chunk delivery and checksum folding.
//!
//! The source is read in planned chunks, strictly in order, with exactly one
//! suspension point per chunk (the read). The accumulator update itself is
//! synchronous CPU work, so chunk `i + 1` is never requested before chunk
//! `i` has been folded in.
//!
//! # Example
//!
//! ```ignore
//! use chunksum::{checksum_async, Algorithm, EngineConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R, len: u64) -> Result<(), chunksum::ChecksumError> {
//!     let checksum = checksum_async(reader, len, Algorithm::Sha256, EngineConfig::default()).await?;
//!     println!("{checksum}");
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::algorithm::Algorithm;
use crate::checksum::Checksum;
use crate::chunk::Chunk;
use crate::config::EngineConfig;
use crate::digest::Accumulator;
use crate::error::ChecksumError;
use crate::plan::ChunkPlan;

pin_project! {
    /// A stream that yields planned chunks from an async reader, in order.
    ///
    /// The reader is consumed sequentially and must deliver at least the
    /// planned number of bytes; running dry mid-plan yields a
    /// [`ChecksumError::Read`] with the failing chunk index, and the first
    /// error ends the stream.
    ///
    /// Uses `futures_io::AsyncRead`, so it works with tokio (via
    /// `tokio_util::compat`), async-std, smol, or any futures-compatible
    /// runtime.
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        plan: ChunkPlan,
        index: u64,
        buffer: Vec<u8>,
        filled: usize,
        finished: bool,
    }
}

impl<R> ChunkStream<R> {
    fn new(reader: R, plan: ChunkPlan) -> Self {
        Self {
            reader,
            plan,
            index: 0,
            buffer: Vec::new(),
            filled: 0,
            finished: false,
        }
    }

    /// Returns the plan driving this stream.
    pub fn plan(&self) -> ChunkPlan {
        self.plan
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, ChecksumError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        let range = match this.plan.range(*this.index) {
            Some(range) => range,
            None => {
                *this.finished = true;
                return Poll::Ready(None);
            }
        };
        let wanted = (range.end - range.start) as usize;
        if this.buffer.len() < wanted {
            this.buffer.resize(wanted, 0);
        }

        while *this.filled < wanted {
            let read = this
                .reader
                .as_mut()
                .poll_read(cx, &mut this.buffer[*this.filled..wanted]);
            match ready!(read) {
                Err(e) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(ChecksumError::read(*this.index, e))));
                }
                Ok(0) => {
                    *this.finished = true;
                    let eof = std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "source ended before the planned length",
                    );
                    return Poll::Ready(Some(Err(ChecksumError::read(*this.index, eof))));
                }
                Ok(n) => *this.filled += n,
            }
        }

        let chunk = Chunk::new(
            *this.index,
            range.start,
            Bytes::copy_from_slice(&this.buffer[..wanted]),
        );
        *this.index += 1;
        *this.filled = 0;
        Poll::Ready(Some(Ok(chunk)))
    }
}

pin_project! {
    /// Future resolving to the checksum of an async source.
    ///
    /// Folds a [`ChunkStream`] into a digest accumulator strictly in order
    /// and finalizes once the plan is exhausted. Any read failure resolves
    /// the future with that error; no partial result is ever produced.
    ///
    /// Created by [`checksum_async`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ChecksumFuture<R> {
        #[pin]
        chunks: ChunkStream<R>,
        accumulator: Option<Accumulator>,
    }
}

impl<R: AsyncRead> Future for ChecksumFuture<R> {
    type Output = Result<Checksum, ChecksumError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match ready!(this.chunks.as_mut().poll_next(cx)) {
                Some(Ok(chunk)) => {
                    let accumulator = this
                        .accumulator
                        .as_mut()
                        .expect("ChecksumFuture polled after completion");
                    accumulator.update(chunk.data());
                }
                Some(Err(e)) => return Poll::Ready(Err(e)),
                None => {
                    let accumulator = this
                        .accumulator
                        .take()
                        .expect("ChecksumFuture polled after completion");
                    return Poll::Ready(Ok(accumulator.finalize()));
                }
            }
        }
    }
}

/// Creates the chunk-delivery stream for a source of `len` bytes.
///
/// This exposes the driver directly for callers that want per-chunk
/// progress; most callers want [`checksum_async`] instead.
pub fn chunk_stream<R: AsyncRead>(reader: R, len: u64, config: EngineConfig) -> ChunkStream<R> {
    ChunkStream::new(reader, ChunkPlan::new(len, config.chunk_size()))
}

/// Computes the checksum of an async source of known length.
///
/// The reader must be positioned at the start of the source and must
/// deliver at least `len` bytes; anything past `len` is never read.
///
/// # Runtime compatibility
///
/// For tokio readers, convert with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use chunksum::{checksum_async, Algorithm, EngineConfig};
///
/// let file = tokio::fs::File::open("data.bin").await?;
/// let len = file.metadata().await?.len();
/// let checksum = checksum_async(file.compat(), len, Algorithm::Md5, EngineConfig::default()).await?;
/// ```
pub fn checksum_async<R: AsyncRead>(
    reader: R,
    len: u64,
    algorithm: Algorithm,
    config: EngineConfig,
) -> ChecksumFuture<R> {
    ChecksumFuture {
        chunks: chunk_stream(reader, len, config),
        accumulator: Some(Accumulator::new(algorithm)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Checksummer;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_empty_source_digest() {
        let reader: &[u8] = &[];
        let checksum = checksum_async(reader, 0, Algorithm::Md5, EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(checksum.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[tokio::test]
    async fn test_matches_sync_engine() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let config = EngineConfig::default().with_chunk_size(64);

        for algorithm in Algorithm::all() {
            let reader: &[u8] = &data;
            let from_async = checksum_async(reader, data.len() as u64, *algorithm, config)
                .await
                .unwrap();
            let from_sync = Checksummer::new(config).checksum_bytes(*algorithm, data.clone());
            assert_eq!(from_async, from_sync);
        }
    }

    #[tokio::test]
    async fn test_stream_yields_planned_chunks() {
        let data: Vec<u8> = (0..20).collect();
        let reader: &[u8] = &data;
        let config = EngineConfig::default().with_chunk_size(8);

        let chunks: Vec<_> = chunk_stream(reader, data.len() as u64, config)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 4);
        let rebuilt: Vec<u8> = chunks.iter().flat_map(|c| c.data().to_vec()).collect();
        assert_eq!(rebuilt, data);
    }

    #[tokio::test]
    async fn test_truncated_source_fails_with_index() {
        // Plan says 32 bytes, reader only has 12: chunk 1 comes up short.
        let short = vec![0u8; 12];
        let reader: &[u8] = &short;
        let config = EngineConfig::default().with_chunk_size(8);

        let err = checksum_async(reader, 32, Algorithm::Sha256, config)
            .await
            .unwrap_err();
        match err {
            ChecksumError::Read { index, .. } => assert_eq!(index, 1),
            other => panic!("expected read failure, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_exact_multiple_trailing_chunk() {
        let data = vec![0xCD; 16];
        let reader: &[u8] = &data;
        let config = EngineConfig::default().with_chunk_size(8);

        let chunks: Vec<_> = chunk_stream(reader, data.len() as u64, config)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert!(chunks[2].is_empty());
    }
}

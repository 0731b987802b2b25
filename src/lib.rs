//! chunksum
//!
//! Chunked, incremental checksums for Rust.
//!
//! `chunksum` computes a cryptographic checksum (MD5, SHA-1, or SHA-256)
//! over a byte source of arbitrary size without holding the whole source in
//! memory: the source is read in bounded, fixed-size chunks, each chunk is
//! folded into a stateful digest accumulator strictly in order, and the
//! digest is finalized once and rendered as lowercase hex. It is designed
//! as a small, composable primitive for:
//!
//! - file integrity display
//! - upload/download verification
//! - content fingerprinting
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT render or persist results
//! - does NOT implement digest algorithms (the RustCrypto crates do)
//!
//! It only does one thing: **Source bytes → one checksum**
//!
//! A checksum is either correct over the entire source or not produced at
//! all: any read failure aborts the computation with the failing chunk
//! index, and there is no partial-result mode.
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use chunksum::{Algorithm, Checksummer, EngineConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = File::open("data.bin")?;
//!     let engine = Checksummer::new(EngineConfig::default());
//!
//!     let checksum = engine.checksum(Algorithm::Sha256, file)?;
//!     println!("{checksum}");
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use chunksum::{checksum_async, Algorithm, EngineConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R, len: u64) -> Result<(), chunksum::ChecksumError> {
//!     let checksum = checksum_async(reader, len, Algorithm::Md5, EngineConfig::default()).await?;
//!     println!("{checksum}");
//!     Ok(())
//! }
//! ```
//!
//! # Supersession
//!
//! Callers that recompute on input changes (a newly selected file, a new
//! algorithm) while a prior computation is still in flight route results
//! through a [`ResultSlot`]: each computation carries the [`Generation`]
//! it was started with, and a result whose generation has been superseded
//! is dropped silently instead of overwriting the current one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod algorithm;
mod checksum;
mod chunk;
mod config;
mod engine;
mod error;
mod plan;
mod slot;

mod digest; // internal accumulator dispatch

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use algorithm::Algorithm;
pub use checksum::{Checksum, MAX_DIGEST_LEN};
pub use chunk::Chunk;
pub use config::{DEFAULT_CHUNK_SIZE, EngineConfig};
pub use engine::{ChunkIter, Checksummer};
pub use error::ChecksumError;
pub use plan::{ChunkPlan, PlanIter};
pub use slot::{Generation, ResultSlot};

#[cfg(feature = "async-io")]
pub use async_stream::{ChecksumFuture, ChunkStream, checksum_async, chunk_stream};

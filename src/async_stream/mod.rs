//! Async support for chunked checksums.
//!
//! This module provides asynchronous computation using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and compatible
//! with tokio, async-std, smol, and other async runtimes.
//!
//! - [`checksum_async`] - Computes a checksum from an async reader.
//! - [`chunk_stream`] - The chunk-delivery driver as a `Stream`.
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{ChecksumFuture, ChunkStream, checksum_async, chunk_stream};

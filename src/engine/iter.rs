//! Chunk delivery from a blocking reader.

use std::io::Read;

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::error::ChecksumError;
use crate::plan::ChunkPlan;

/// An iterator that reads planned chunks from a reader, in order.
///
/// Each call to `next` reads exactly one chunk's worth of bytes (the final
/// chunk may be shorter, or empty). The reader is consumed sequentially, so
/// it must be positioned at the start of the source and must deliver at
/// least the planned number of bytes; running dry mid-plan surfaces as a
/// [`ChecksumError::Read`] with the failing chunk index.
///
/// The first error ends the iteration; no further chunks are produced.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use chunksum::{Checksummer, EngineConfig};
///
/// let data = b"0123456789";
/// let engine = Checksummer::new(EngineConfig::default().with_chunk_size(4));
///
/// let chunks: Vec<_> = engine
///     .chunks(data.len() as u64, Cursor::new(&data[..]))
///     .collect::<Result<_, _>>()?;
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].data().as_ref(), b"89");
/// # Ok::<(), chunksum::ChecksumError>(())
/// ```
pub struct ChunkIter<R> {
    reader: R,
    plan: ChunkPlan,
    index: u64,
    buffer: Vec<u8>,
    finished: bool,
}

impl<R: Read> ChunkIter<R> {
    /// Creates a new chunk iterator over `reader` following `plan`.
    pub(crate) fn new(reader: R, plan: ChunkPlan) -> Self {
        Self {
            reader,
            plan,
            index: 0,
            buffer: Vec::new(),
            finished: false,
        }
    }

    /// Returns the plan driving this iterator.
    pub fn plan(&self) -> ChunkPlan {
        self.plan
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, ChecksumError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let range = match self.plan.range(self.index) {
            Some(range) => range,
            None => {
                self.finished = true;
                return None;
            }
        };

        let wanted = (range.end - range.start) as usize;
        self.buffer.resize(wanted, 0);

        if let Err(e) = self.reader.read_exact(&mut self.buffer[..wanted]) {
            self.finished = true;
            return Some(Err(ChecksumError::read(self.index, e)));
        }

        let chunk = Chunk::new(self.index, range.start, Bytes::copy_from_slice(&self.buffer));
        self.index += 1;
        Some(Ok(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = (self.plan.count() - self.index) as usize;
        // Upper bound only: an error can end the iteration early.
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn iter_for(data: &[u8], chunk_size: usize) -> ChunkIter<Cursor<&[u8]>> {
        let plan = ChunkPlan::new(data.len() as u64, chunk_size);
        ChunkIter::new(Cursor::new(data), plan)
    }

    #[test]
    fn test_delivers_chunks_in_order() {
        let data: Vec<u8> = (0..20).collect();
        let chunks: Vec<_> = iter_for(&data, 8).collect::<Result<_, _>>().unwrap();

        assert_eq!(chunks.len(), 3);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index(), i as u64);
            assert_eq!(chunk.offset(), i as u64 * 8);
        }
        let rebuilt: Vec<u8> = chunks.iter().flat_map(|c| c.data().to_vec()).collect();
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_empty_source_yields_one_empty_chunk() {
        let chunks: Vec<_> = iter_for(&[], 8).collect::<Result<_, _>>().unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_empty());
        assert_eq!(chunks[0].offset(), 0);
    }

    #[test]
    fn test_exact_multiple_yields_trailing_empty_chunk() {
        let data = vec![0xAB; 16];
        let chunks: Vec<_> = iter_for(&data, 8).collect::<Result<_, _>>().unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 0);
        assert_eq!(chunks[2].offset(), 16);
    }

    #[test]
    fn test_truncated_source_fails_with_index() {
        // Plan says 20 bytes, reader only has 12: chunk 1 comes up short.
        let short = vec![0u8; 12];
        let plan = ChunkPlan::new(20, 8);
        let mut iter = ChunkIter::new(Cursor::new(&short[..]), plan);

        assert!(iter.next().unwrap().is_ok());
        match iter.next().unwrap() {
            Err(ChecksumError::Read { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected read failure, got {other:?}"),
        }
        assert!(iter.next().is_none(), "error must end the iteration");
    }
}

//! The Chunk type - one planned segment of the source.

use std::fmt;

use bytes::Bytes;

/// One chunk of the source, as delivered to the digest accumulator.
///
/// Chunks are emitted in strictly increasing index order; `offset` is the
/// byte position of the chunk within the source. The final chunk of a
/// computation may be empty (see [`ChunkPlan`](crate::ChunkPlan)).
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use chunksum::Chunk;
///
/// let chunk = Chunk::new(1, 8, Bytes::from_static(b"payload"));
/// assert_eq!(chunk.index(), 1);
/// assert_eq!(chunk.range(), 8..15);
/// ```
#[derive(Debug, Clone)]
pub struct Chunk {
    index: u64,
    offset: u64,
    data: Bytes,
}

impl Chunk {
    /// Creates a chunk from its plan index, source offset, and payload.
    pub fn new(index: u64, offset: u64, data: impl Into<Bytes>) -> Self {
        Self {
            index,
            offset,
            data: data.into(),
        }
    }

    /// Returns the chunk's index in the plan.
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the chunk's byte offset within the source.
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the chunk payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the chunk carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the chunk's byte range within the source.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.offset + self.data.len() as u64
    }

    /// Consumes the chunk and returns the payload.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk#{}({} bytes @ {})", self.index, self.len(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let chunk = Chunk::new(0, 0, &b"hello"[..]);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.data().as_ref(), b"hello");
    }

    #[test]
    fn test_empty_trailing_chunk() {
        let chunk = Chunk::new(2, 16, Bytes::new());
        assert!(chunk.is_empty());
        assert_eq!(chunk.range(), 16..16);
    }

    #[test]
    fn test_range() {
        let chunk = Chunk::new(1, 100, &b"hello"[..]);
        assert_eq!(chunk.range(), 100..105);
    }

    #[test]
    fn test_into_data() {
        let chunk = Chunk::new(0, 0, &b"payload"[..]);
        assert_eq!(chunk.into_data().as_ref(), b"payload");
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(3, 24, &b"hello"[..]);
        let s = chunk.to_string();
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 24"));
    }
}

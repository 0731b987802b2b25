//! Supersession of in-flight computations.
//!
//! - [`Generation`] - Opaque token identifying one computation.
//! - [`ResultSlot`] - Holds the latest non-superseded result.
//!
//! Starting a computation for a new source or algorithm must invalidate any
//! prior computation that is still suspended between chunks; otherwise a
//! slow, stale computation can finish late and overwrite the checksum of
//! the current selection. The engine has no cancel signal - instead every
//! computation carries the [`Generation`] it was started with, and the slot
//! applies a result only if that generation is still current. Stale results
//! are dropped silently; this is a normal outcome, not an error.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque token identifying one computation within a [`ResultSlot`].
///
/// Issued by [`ResultSlot::begin`]; compared at commit time. Tokens are
/// never reused within a slot's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

/// A single result slot with supersession.
///
/// One slot corresponds to one logical output - "the checksum of the
/// currently selected source". Each call to [`begin`](Self::begin)
/// atomically supersedes all earlier computations; their commits return
/// `false` and their values are dropped. [`latest`](Self::latest) never
/// observes a superseded value.
///
/// # Example
///
/// ```
/// use chunksum::ResultSlot;
///
/// let slot = ResultSlot::new();
///
/// let first = slot.begin();
/// let second = slot.begin(); // supersedes `first`
///
/// assert!(slot.commit(second, "checksum of the new selection"));
/// assert!(!slot.commit(first, "checksum of the old selection"));
/// assert_eq!(slot.latest(), Some("checksum of the new selection"));
/// ```
#[derive(Debug)]
pub struct ResultSlot<T> {
    current: AtomicU64,
    latest: Mutex<Option<(u64, T)>>,
}

impl<T> ResultSlot<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Starts a new computation, superseding all earlier ones.
    ///
    /// Returns the token the computation must present when committing its
    /// result. The supersession takes effect immediately: any in-flight
    /// computation holding an older token is already stale.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Returns the token of the most recently started computation.
    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::Acquire))
    }

    /// Commits a finished computation's value.
    ///
    /// The value is stored only if `generation` is still current; a stale
    /// value is dropped silently and `false` is returned. A superseded
    /// computation is a normal outcome, not a failure.
    pub fn commit(&self, generation: Generation, value: T) -> bool {
        let mut latest = self.latest.lock().expect("slot lock poisoned");
        if generation.0 != self.current.load(Ordering::Acquire) {
            return false;
        }
        *latest = Some((generation.0, value));
        true
    }

    /// Returns the latest committed value, if it has not been superseded.
    ///
    /// A value committed for an older generation - even one stored a moment
    /// ago - is never returned.
    pub fn latest(&self) -> Option<T>
    where
        T: Clone,
    {
        let latest = self.latest.lock().expect("slot lock poisoned");
        match &*latest {
            Some((generation, value)) if *generation == self.current.load(Ordering::Acquire) => {
                Some(value.clone())
            }
            _ => None,
        }
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_current_generation() {
        let slot = ResultSlot::new();
        let generation = slot.begin();
        assert!(slot.commit(generation, 42));
        assert_eq!(slot.latest(), Some(42));
    }

    #[test]
    fn test_stale_commit_is_dropped() {
        let slot = ResultSlot::new();
        let old = slot.begin();
        let new = slot.begin();

        assert!(!slot.commit(old, "stale"));
        assert_eq!(slot.latest(), None);

        assert!(slot.commit(new, "fresh"));
        assert_eq!(slot.latest(), Some("fresh"));
    }

    #[test]
    fn test_stale_commit_after_newer_result() {
        // The slow computation finishes last; it must not overwrite.
        let slot = ResultSlot::new();
        let slow = slot.begin();
        let fast = slot.begin();

        assert!(slot.commit(fast, "fast"));
        assert!(!slot.commit(slow, "slow"));
        assert_eq!(slot.latest(), Some("fast"));
    }

    #[test]
    fn test_begin_invalidates_committed_value() {
        let slot = ResultSlot::new();
        let generation = slot.begin();
        assert!(slot.commit(generation, 1));
        assert_eq!(slot.latest(), Some(1));

        // A new computation started; the stored value is no longer current.
        let _ = slot.begin();
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn test_generations_are_distinct() {
        let slot: ResultSlot<()> = ResultSlot::new();
        let a = slot.begin();
        let b = slot.begin();
        assert_ne!(a, b);
        assert_eq!(slot.current(), b);
    }

    #[test]
    fn test_concurrent_commits_never_leave_stale_value() {
        use std::sync::Arc;
        use std::thread;

        let slot = Arc::new(ResultSlot::new());
        let older = slot.begin();
        let newer = slot.begin();

        let handles: Vec<_> = [(older, "older"), (newer, "newer")]
            .into_iter()
            .map(|(generation, value)| {
                let slot = Arc::clone(&slot);
                thread::spawn(move || slot.commit(generation, value))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Whatever the interleaving, the older result can never win.
        assert_eq!(slot.latest(), Some("newer"));
    }
}

//! Fixed-Size Circular Buffer for Per-Frame Sample History
//!
//! ## Overview
//!
//! Release velocity is estimated from the last few frames of hand motion, so
//! the smoother needs a sliding window of samples that never allocates and
//! never needs explicit eviction. This ring buffer has a capacity fixed at
//! compile time through const generics and overwrites its oldest slot once
//! full.
//!
//! ## Design Rationale
//!
//! ### Why a Circular Buffer?
//!
//! - O(1) insertion (overwrites oldest when full)
//! - O(1) access to the most recent sample
//! - Newest-first iteration, which is the order the smoother consumes
//! - Zero heap allocations, same footprint every frame
//!
//! ### Why Not `heapless::HistoryBuffer`?
//!
//! The smoother's walk must distinguish a slot that was never written from one
//! holding stale data, and `clear()` must return every slot to "never written".
//! Storing `Option<T>` per slot makes both explicit.
//!
//! ### Memory Layout
//!
//! ```text
//! CircularBuffer<T, 5> after 7 pushes (A..G):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  F  │  G  │  C  │  D  │  E  │
//! └─────┴─────┴─────┴─────┴─────┘
//!          ▲     ▲
//!          │     └─ write_pos (next overwrite, oldest)
//!          └─ newest
//!
//! recent(): G, F, E, D, C
//! ```
//!
//! A zero-capacity buffer is legal and simply never stores anything.

/// Fixed-size circular buffer
///
/// ## Internal Invariants
///
/// - `write_pos < N` whenever `N > 0`
/// - `len <= N`
/// - Slots outside the logical range hold `None`
///
/// ## Thread Safety
///
/// Not synchronized; each buffer belongs to a single tracking session.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T: Copy, const N: usize> {
    /// Storage; `None` marks a slot never written since the last clear
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of stored items
    len: usize,
}

impl<T: Copy, const N: usize> CircularBuffer<T, N> {
    /// Creates a new empty circular buffer
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds an item, overwriting the oldest when full
    pub fn push(&mut self, item: T) {
        if N == 0 {
            return;
        }

        self.data[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recent item
    pub fn last(&self) -> Option<&T> {
        self.recent().next()
    }

    /// Iterate from newest to oldest
    pub fn recent(&self) -> RecentIter<'_, T, N> {
        RecentIter {
            buffer: self,
            offset: 0,
        }
    }

    /// Return every slot to the never-written state
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }

    /// Item `back` steps behind the newest (0 = newest)
    ///
    /// ```text
    /// physical index = (write_pos + N - 1 - back) mod N
    /// ```
    fn slot_back(&self, back: usize) -> Option<&T> {
        if back >= self.len {
            return None;
        }

        let idx = (self.write_pos + N - 1 - back) % N;
        self.data[idx].as_ref()
    }
}

/// Newest-first iterator over circular buffer contents
pub struct RecentIter<'a, T: Copy, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    offset: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for RecentIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.slot_back(self.offset)?;
        self.offset += 1;
        Some(item)
    }
}

impl<T: Copy, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buffer: CircularBuffer<u32, 5> = CircularBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.last().is_none());
        assert_eq!(buffer.recent().count(), 0);
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = CircularBuffer::<u32, 5>::new();
        buffer.push(25);

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last(), Some(&25));
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = CircularBuffer::<u32, 3>::new();
        for i in 0..5 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), 3);

        // Oldest two were overwritten
        let values: Vec<u32> = buffer.recent().copied().collect();
        assert_eq!(values, vec![4, 3, 2]);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut buffer = CircularBuffer::<u32, 4>::new();
        for i in 0..6 {
            buffer.push(i);
        }

        let values: Vec<u32> = buffer.recent().copied().collect();
        assert_eq!(values, vec![5, 4, 3, 2]);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut buffer = CircularBuffer::<u32, 3>::new();
        buffer.push(1);
        buffer.push(2);
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());

        buffer.push(9);
        let values: Vec<u32> = buffer.recent().copied().collect();
        assert_eq!(values, vec![9]);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut buffer = CircularBuffer::<u32, 0>::new();
        buffer.push(1);

        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());
    }
}

//! Fixed-capacity ring buffer with FIFO eviction.

use std::collections::VecDeque;

/// Insertion-ordered buffer holding at most `capacity` items.
///
/// The capacity invariant is enforced inside [`RingBuffer::push`]: when a
/// push would exceed capacity the oldest element is dropped first, so the
/// buffer always holds the most recent items in insertion order.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RingBuffer<T> {
    /// Create an empty buffer. A zero capacity is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { items: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append to the tail, evicting the head if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// The most recent item, or `None` when the buffer is empty.
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// The most recent `min(limit, len)` items in chronological order.
    pub fn history(&self, limit: usize) -> Vec<T> {
        let skip = self.items.len().saturating_sub(limit);
        self.items.iter().skip(skip).cloned().collect()
    }

    /// The full current window in chronological order.
    pub fn all(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }

    /// The full current window, newest first.
    pub fn reversed(&self) -> Vec<T> {
        self.items.iter().rev().cloned().collect()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of retained items.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

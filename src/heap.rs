//! Array-backed binary min-heap priority queue
//!
//! [`PriorityHeap`] stores labeled entries in a contiguous buffer laid out as
//! an implicit binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`. The entry with the minimum priority is always at index 0.
//!
//! The buffer starts at a small fixed capacity and doubles whenever an
//! enqueue finds it full; it never shrinks, and [`clear`](PriorityHeap::clear)
//! keeps the allocation for reuse.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | O(log n)   |
//! | `dequeue` | O(log n)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use pqheap::{Entry, PriorityHeap};
//!
//! let mut pq = PriorityHeap::new();
//! pq.enqueue(Entry::new("write report", 3.0));
//! pq.enqueue(Entry::new("fix outage", 1.0));
//! pq.enqueue(Entry::new("review patch", 2.0));
//!
//! assert_eq!(pq.peek().unwrap().label, "fix outage");
//! assert_eq!(pq.dequeue().unwrap().label, "fix outage");
//! assert_eq!(pq.dequeue().unwrap().label, "review patch");
//! assert_eq!(pq.dequeue().unwrap().label, "write report");
//! assert!(pq.is_empty());
//! ```

use crate::error::HeapError;

/// Buffer size a freshly constructed heap allocates up front.
const INITIAL_CAPACITY: usize = 10;

/// A labeled entry with a numeric priority
///
/// The label is opaque to the heap and never inspected; only `priority`
/// participates in ordering. Lower priority values dequeue first.
///
/// Priorities are compared with [`f64::total_cmp`], which is a total order
/// over every bit pattern, so even a NaN priority cannot wedge the heap
/// (it sorts after positive infinity).
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    /// Caller-supplied identifier; duplicates are allowed
    pub label: T,
    /// Ordering key; lower values are more urgent
    pub priority: f64,
}

impl<T> Entry<T> {
    /// Creates an entry from a label and priority
    pub fn new(label: T, priority: f64) -> Self {
        Self { label, priority }
    }
}

/// An array-backed binary min-heap of labeled entries
///
/// Entries dequeue in non-decreasing priority order. Equal priorities
/// dequeue in an unspecified relative order.
///
/// The heap is single-threaded: it is not `Sync`-aware in any special way
/// and callers needing shared access must provide their own locking.
#[derive(Debug, Clone)]
pub struct PriorityHeap<T> {
    /// Implicit binary tree; `entries.len()` is the logical element count,
    /// `entries.capacity()` the allocated slot count
    entries: Vec<Entry<T>>,
}

impl<T> PriorityHeap<T> {
    /// Creates an empty heap with the initial capacity pre-allocated
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Returns the number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the allocated slot count
    ///
    /// Always `>= len()`. Grows by doubling and never shrinks.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Inserts an entry, keeping the heap ordered
    ///
    /// Doubles the buffer first if it is full, never growing to less than
    /// the initial capacity. A cloned heap allocates only its length, so
    /// the floor keeps the doubling schedule intact after a clone.
    /// Always succeeds.
    pub fn enqueue(&mut self, entry: Entry<T>) {
        if self.entries.len() == self.entries.capacity() {
            self.grow((2 * self.entries.capacity()).max(INITIAL_CAPACITY));
        }
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the minimum-priority entry without removing it
    ///
    /// # Errors
    ///
    /// [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<&Entry<T>, HeapError> {
        self.entries.first().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the minimum-priority entry
    ///
    /// The last entry is moved into the root slot and sifted down to its
    /// place. A one-entry heap simply empties.
    ///
    /// # Errors
    ///
    /// [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn dequeue(&mut self) -> Result<Entry<T>, HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        let front = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(front)
    }

    /// Removes all entries
    ///
    /// The allocation is kept; capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the live entries in internal array order
    ///
    /// The order is the heap layout, not priority order. Intended for
    /// diagnostics and tests; drain with [`dequeue`](Self::dequeue) to
    /// consume entries by priority.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Checks the heap-order invariant across the whole buffer
    ///
    /// Scans every parent/child pair and the length/capacity bound.
    /// Intended to be called after each mutation in tests; the mutating
    /// operations do not rely on it.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvariantViolated`] naming the parent index at which
    /// the heap property fails to hold.
    pub fn validate(&self) -> Result<(), HeapError> {
        if self.entries.len() > self.entries.capacity() {
            // The logical length is never a valid parent index, so this
            // report cannot collide with a heap-order violation.
            return Err(HeapError::InvariantViolated {
                index: self.entries.len(),
            });
        }
        for index in 0..self.entries.len() {
            for child in [self.left_child_of(index), self.right_child_of(index)]
                .into_iter()
                .flatten()
            {
                if self.less(child, index) {
                    return Err(HeapError::InvariantViolated { index });
                }
            }
        }
        Ok(())
    }

    /// True if the entry at `a` has strictly smaller priority than the one at `b`
    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a]
            .priority
            .total_cmp(&self.entries[b].priority)
            .is_lt()
    }

    /// Parent slot of `index`, or `None` for the root
    fn parent_of(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Left child slot of `index`, if one is in range
    fn left_child_of(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        (left < self.entries.len()).then_some(left)
    }

    /// Right child slot of `index`, if one is in range
    fn right_child_of(&self, index: usize) -> Option<usize> {
        let right = 2 * index + 2;
        (right < self.entries.len()).then_some(right)
    }

    /// Moves the entry at `index` up until its parent is no larger
    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = Self::parent_of(index) {
            if !self.less(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the entry at `index` down until both children are no smaller
    fn sift_down(&mut self, mut index: usize) {
        while let Some(left) = self.left_child_of(index) {
            // Right child wins only on strictly smaller priority.
            let child = match self.right_child_of(index) {
                Some(right) if self.less(right, left) => right,
                _ => left,
            };
            if !self.less(child, index) {
                break;
            }
            self.entries.swap(index, child);
            index = child;
        }
    }

    /// Replaces the buffer with a larger one, moving all entries across
    ///
    /// The old allocation is released only after every entry has moved.
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.entries.capacity());
        let mut bigger = Vec::with_capacity(new_capacity);
        bigger.append(&mut self.entries);
        self.entries = bigger;
    }
}

impl<T> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Entry<T>> for PriorityHeap<T> {
    fn extend<I: IntoIterator<Item = Entry<T>>>(&mut self, iter: I) {
        for entry in iter {
            self.enqueue(entry);
        }
    }
}

impl<T> FromIterator<Entry<T>> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = Entry<T>>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

//! Array-Backed Min-Heap Priority Queue
//!
//! This crate provides [`PriorityHeap`], a binary min-heap of labeled entries
//! with numeric priorities, stored in a single contiguous growable buffer.
//!
//! # Features
//!
//! - **Min-heap semantics**: lower priority values dequeue first
//! - **Opaque labels**: the label type is generic and never inspected
//! - **Amortized doubling growth**: the buffer doubles on overflow, so n
//!   insertions cost O(n) total in buffer moves
//! - **Diagnostic validator**: [`PriorityHeap::validate`] scans the whole
//!   buffer for heap-property violations, for use after every mutation in
//!   tests
//!
//! # Example
//!
//! ```rust
//! use pqheap::{Entry, PriorityHeap};
//!
//! let mut pq = PriorityHeap::new();
//! pq.enqueue(Entry::new("deploy", 2.0));
//! pq.enqueue(Entry::new("triage", 1.0));
//!
//! assert_eq!(pq.len(), 2);
//! assert_eq!(pq.peek().unwrap().label, "triage");
//!
//! let front = pq.dequeue().unwrap();
//! assert_eq!((front.label, front.priority), ("triage", 1.0));
//! ```

pub mod error;
pub mod heap;

// Re-export the public types for convenience
pub use error::HeapError;
pub use heap::{Entry, PriorityHeap};

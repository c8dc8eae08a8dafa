//! Error type for heap operations

use std::fmt;

/// Error type for heap operations
///
/// `EmptyContainer` is the only caller-triggerable failure and is always
/// avoidable by checking [`is_empty`](crate::PriorityHeap::is_empty) first.
/// `InvariantViolated` is produced only by the diagnostic
/// [`validate`](crate::PriorityHeap::validate) pass and signals an
/// implementation bug, not a usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `dequeue` was called on an empty heap
    EmptyContainer,
    /// The heap property (or the length/capacity bound) is broken
    ///
    /// `index` is the parent index at which the violation was detected.
    /// For a length/capacity bound violation it is the logical length,
    /// which is out of parent-index range and so cannot be mistaken for
    /// a heap-order violation.
    InvariantViolated {
        /// Offending parent index, or the logical length for a bound violation
        index: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => {
                write!(f, "heap is empty")
            }
            HeapError::InvariantViolated { index } => {
                write!(f, "heap property violated at index {index}")
            }
        }
    }
}

impl std::error::Error for HeapError {}

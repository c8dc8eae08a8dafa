//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use pqheap::{Entry, PriorityHeap};

/// Test that enqueue and dequeue keep the minimum at the root
fn check_enqueue_dequeue_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = PriorityHeap::new();
    let mut model: Vec<f64> = Vec::new();

    for (should_dequeue, value) in ops {
        if should_dequeue && !heap.is_empty() {
            let front = heap.dequeue().unwrap();
            let pos = model
                .iter()
                .position(|&p| p == front.priority)
                .expect("dequeued a priority that was never enqueued");
            model.remove(pos);
        } else {
            let priority = f64::from(value);
            heap.enqueue(Entry::new(value, priority));
            model.push(priority);
        }

        prop_assert!(heap.validate().is_ok());
        prop_assert_eq!(heap.len(), model.len());

        if let Ok(front) = heap.peek() {
            let min = model.iter().cloned().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(front.priority, min);
        } else {
            prop_assert!(model.is_empty());
        }
    }

    Ok(())
}

/// Test that draining yields non-decreasing priorities and loses nothing
fn check_sorted_extraction(values: Vec<i32>) -> Result<(), TestCaseError> {
    let expected = values.len();
    let mut heap: PriorityHeap<i32> = values
        .into_iter()
        .map(|v| Entry::new(v, f64::from(v)))
        .collect();

    prop_assert!(heap.validate().is_ok());
    prop_assert_eq!(heap.len(), expected);

    let mut last = f64::NEG_INFINITY;
    let mut drained = 0;
    while !heap.is_empty() {
        let front = heap.dequeue().unwrap();
        prop_assert!(
            front.priority >= last,
            "dequeued priority {} after {}",
            front.priority,
            last
        );
        last = front.priority;
        drained += 1;
        prop_assert!(heap.validate().is_ok());
    }

    prop_assert_eq!(drained, expected);
    prop_assert!(heap.dequeue().is_err());
    Ok(())
}

/// Test that clear empties the heap at any point in an op sequence
fn check_clear_invariant(values: Vec<i32>, clear_at: usize) -> Result<(), TestCaseError> {
    let mut heap = PriorityHeap::new();

    for (i, value) in values.iter().enumerate() {
        if i == clear_at {
            heap.clear();
            prop_assert!(heap.is_empty());
            prop_assert!(heap.peek().is_err());
        }
        heap.enqueue(Entry::new(*value, f64::from(*value)));
        prop_assert!(heap.validate().is_ok());
    }

    let expected = if clear_at < values.len() {
        values.len() - clear_at
    } else {
        values.len()
    };
    prop_assert_eq!(heap.len(), expected);
    Ok(())
}

/// Test that duplicate priorities all come back out, each exactly once
fn check_duplicates_preserved(labels: Vec<u8>) -> Result<(), TestCaseError> {
    let mut heap = PriorityHeap::new();
    for &label in &labels {
        // Priority collapses to a handful of buckets to force ties.
        heap.enqueue(Entry::new(label, f64::from(label % 4)));
    }

    let mut seen = Vec::new();
    while let Ok(front) = heap.dequeue() {
        seen.push(front.label);
        prop_assert!(heap.validate().is_ok());
    }

    let mut expected = labels;
    expected.sort_unstable();
    seen.sort_unstable();
    prop_assert_eq!(seen, expected);
    Ok(())
}

proptest! {
    #[test]
    fn test_enqueue_dequeue_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        check_enqueue_dequeue_invariant(ops)?;
    }

    #[test]
    fn test_sorted_extraction(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        check_sorted_extraction(values)?;
    }

    #[test]
    fn test_clear_invariant(
        values in prop::collection::vec(-100i32..100, 0..100),
        clear_at in 0usize..120
    ) {
        check_clear_invariant(values, clear_at)?;
    }

    #[test]
    fn test_duplicates_preserved(labels in prop::collection::vec(any::<u8>(), 0..150)) {
        check_duplicates_preserved(labels)?;
    }

    /// Growth boundary: sequences longer than the initial capacity must
    /// stay correct across every reallocation.
    #[test]
    fn test_growth_transparency(values in prop::collection::vec(-1000i32..1000, 50..300)) {
        check_sorted_extraction(values)?;
    }
}

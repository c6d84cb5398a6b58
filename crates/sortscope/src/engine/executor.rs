//! Quicksort driver for sortscope.
//!
//! ## Purpose
//!
//! This module drives the full in-place quicksort over a sequence. It
//! repeatedly partitions pending ranges, forwards every algorithm event to
//! the caller's observer, and tallies a [`SortReport`] of the work
//! performed.
//!
//! ## Design notes
//!
//! * **Explicit work-stack**: Pending `(low, high)` ranges live on a heap
//!   stack instead of the call stack, so adversarial input (already sorted
//!   or reverse sorted, which drives last-element pivoting to its worst
//!   case) cannot overflow the call stack.
//! * **Recursion-equivalent order**: Ranges are processed depth first with
//!   the low sub-range popped first, which reproduces the event order of
//!   the classic recursive formulation exactly.
//! * **Synchronous delivery**: The observer has seen every event before
//!   `sort` returns.
//!
//! ## Invariants
//!
//! * After `sort`, the sequence is in non-decreasing order and is a
//!   permutation of the input multiset.
//! * A base-case range (`low >= high`) emits zero events.
//! * Sorting an already-sorted, single-element, or empty sequence emits no
//!   `Swapped` event with an unequal index pair.
//!
//! ## Non-goals
//!
//! * This module does not validate input; any slice is well-formed.
//! * This module does not pace events; animation delays belong to the
//!   front end.
//! * This module does not provide cancellation; callers drop the call
//!   boundary at a surrounding layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::partition::partition;
use crate::primitives::events::{SortEvent, SortObserver};

// ============================================================================
// Report
// ============================================================================

/// Tally of the observable work performed by one sort or toggle cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Number of `Swapped` events emitted (same-index swaps included).
    pub swaps: usize,

    /// Number of ranges partitioned.
    pub partitions: usize,

    /// Whether the cycle was a reverse rather than a sort.
    pub reversed: bool,
}

// ============================================================================
// Recording Observer
// ============================================================================

/// Forwards events to the caller's observer while tallying the report.
struct Recording<'a, O: SortObserver> {
    inner: &'a mut O,
    report: SortReport,
}

impl<O: SortObserver> SortObserver for Recording<'_, O> {
    fn on_event(&mut self, event: SortEvent) {
        match event {
            SortEvent::Swapped { .. } => self.report.swaps += 1,
            SortEvent::PartitionDecided { .. } => self.report.partitions += 1,
            SortEvent::Reversed => self.report.reversed = true,
        }
        self.inner.on_event(event);
    }
}

// ============================================================================
// Sort
// ============================================================================

/// Sort `seq` in place in non-decreasing order, streaming every step to
/// `observer`.
///
/// Events arrive in the order of the recursive Lomuto formulation: each
/// range is partitioned, then its low sub-range is fully processed before
/// its high sub-range.
pub fn sort<T, O>(seq: &mut [T], observer: &mut O) -> SortReport
where
    T: Ord,
    O: SortObserver,
{
    let mut recording = Recording {
        inner: observer,
        report: SortReport::default(),
    };

    let n = seq.len();
    if n > 1 {
        let mut pending: Vec<(usize, usize)> = vec![(0, n - 1)];

        while let Some((low, high)) = pending.pop() {
            if low >= high {
                continue;
            }
            let pivot = partition(seq, low, high, &mut recording);

            // Push the high sub-range first so the low one is popped next,
            // keeping depth-first left-to-right traversal.
            pending.push((pivot + 1, high));
            if pivot > 0 {
                pending.push((low, pivot - 1));
            }
        }
    }

    recording.report
}

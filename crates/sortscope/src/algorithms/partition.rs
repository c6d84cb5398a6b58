//! Lomuto partitioning with observable swaps.
//!
//! ## Purpose
//!
//! This module provides the partition step of quicksort: it picks the last
//! element of a range as the pivot, moves everything at or below the pivot
//! to the front of the range with a single forward scan, and places the
//! pivot at its final index. Every swap is reported to the observer as it
//! happens, followed by one partition notification once the pivot index is
//! known.
//!
//! ## Design notes
//!
//! * **Lomuto scheme**: Last-element pivot, one forward scan, a boundary
//!   index tracking the last slot known to hold a value at or below the
//!   pivot.
//! * **Faithful reporting**: A swap of a position with itself is emitted
//!   too; it is a no-op on data but a reportable step for animation.
//! * **Tie-break**: Elements equal to the pivot class with the low side.
//!
//! ## Invariants
//!
//! * Preconditions `low <= high < seq.len()` are debug-asserted; violating
//!   them is a broken caller, never a recoverable condition.
//! * Postcondition: every element in `[low, p-1]` is `<=` the pivot and
//!   every element in `[p+1, high]` is `>` the pivot, where `p` is the
//!   returned index.
//!
//! ## Non-goals
//!
//! * This module does not recurse; the engine drives the full sort.
//! * This module does not choose pivots adaptively.

// Internal dependencies
use crate::primitives::events::{SortEvent, SortObserver};

// ============================================================================
// Partition
// ============================================================================

/// Partition `seq[low..=high]` around the last element and return the
/// pivot's final index.
///
/// Emits [`SortEvent::Swapped`] for every swap performed (including
/// same-index swaps) and [`SortEvent::PartitionDecided`] immediately after
/// the pivot placement swap.
pub fn partition<T, O>(seq: &mut [T], low: usize, high: usize, observer: &mut O) -> usize
where
    T: Ord,
    O: SortObserver,
{
    debug_assert!(low <= high, "partition: low must not exceed high");
    debug_assert!(high < seq.len(), "partition: high out of bounds");

    // Boundary index: the next slot for a value at or below the pivot.
    let mut boundary = low;

    for scan in low..high {
        if seq[scan] <= seq[high] {
            seq.swap(boundary, scan);
            observer.on_event(SortEvent::Swapped {
                a: boundary,
                b: scan,
            });
            boundary += 1;
        }
    }

    // Pivot placement: the final resting index is only known now.
    seq.swap(boundary, high);
    observer.on_event(SortEvent::Swapped {
        a: boundary,
        b: high,
    });
    observer.on_event(SortEvent::PartitionDecided {
        low,
        high,
        pivot: boundary,
    });

    boundary
}

//! Observable sort events and the observer abstraction.
//!
//! ## Purpose
//!
//! This module defines the event vocabulary the sorting algorithms emit and
//! the observer trait front ends implement to watch a sort in progress. A
//! renderer animates the events, a test suite records them, and a headless
//! caller discards them.
//!
//! ## Design notes
//!
//! * **Transient**: Events are `Copy` records created during a sort call,
//!   delivered to the observer, then discarded. Nothing is persisted.
//! * **Synchronous**: Delivery happens inline at the mutation site, so the
//!   observer sees events in exactly the order the mutations occur.
//! * **Ergonomic**: Any `FnMut(SortEvent)` closure is an observer; the
//!   [`NullObserver`] and [`EventLog`] cover the common headless cases.
//!
//! ## Key concepts
//!
//! * **Swapped**: Two positions traded contents. A swap of a position with
//!   itself is a no-op on data but still a reportable step.
//! * **PartitionDecided**: A pivot reached its final resting index, emitted
//!   immediately after the pivot placement swap.
//! * **Reversed**: The whole sequence was mirrored in one step.
//!
//! ## Invariants
//!
//! * Indices in events are valid positions of the sequence being sorted.
//! * For `PartitionDecided`, `low <= pivot <= high`.
//!
//! ## Non-goals
//!
//! * This module does not pace, buffer, or reorder events; animation delays
//!   belong to the front end.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Event Type
// ============================================================================

/// One observable step of a sort or reverse operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// A pivot reached its final index within `[low, high]`.
    PartitionDecided {
        /// Low bound of the partitioned range.
        low: usize,
        /// High bound of the partitioned range.
        high: usize,
        /// Final resting index of the pivot.
        pivot: usize,
    },

    /// Positions `a` and `b` traded contents (`a == b` is reported too).
    Swapped {
        /// First position of the swap.
        a: usize,
        /// Second position of the swap.
        b: usize,
    },

    /// The sequence was reversed end to end.
    Reversed,
}

// ============================================================================
// Observer Trait
// ============================================================================

/// Receiver for [`SortEvent`]s emitted during a sort or reverse call.
///
/// Delivery is synchronous and ordered: the producing call does not return
/// until every event has been handed to the observer.
pub trait SortObserver {
    /// Handle one observable step.
    fn on_event(&mut self, event: SortEvent);
}

/// Any `FnMut(SortEvent)` closure is an observer.
impl<F: FnMut(SortEvent)> SortObserver for F {
    fn on_event(&mut self, event: SortEvent) {
        self(event)
    }
}

// ============================================================================
// Built-in Observers
// ============================================================================

/// Observer that discards every event, for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SortObserver for NullObserver {
    fn on_event(&mut self, _event: SortEvent) {}
}

/// Observer that records every event in order, for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    /// Recorded events in delivery order.
    pub events: Vec<SortEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Number of recorded [`SortEvent::Swapped`] steps.
    pub fn swaps(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SortEvent::Swapped { .. }))
            .count()
    }

    /// Number of recorded [`SortEvent::PartitionDecided`] steps.
    pub fn partitions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SortEvent::PartitionDecided { .. }))
            .count()
    }
}

impl SortObserver for EventLog {
    fn on_event(&mut self, event: SortEvent) {
        self.events.push(event);
    }
}

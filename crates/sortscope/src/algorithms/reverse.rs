//! End-to-end sequence reversal.
//!
//! ## Purpose
//!
//! This module flips a sequence into its mirror order in one step. It is
//! the cheap path for a direction toggle on an already-sorted sequence:
//! no comparisons, no per-element events, one notification.
//!
//! ## Invariants
//!
//! * The result is exactly the mirror of the prior order.
//! * Length and multiset of values are unchanged.
//! * Reversing twice restores the original order.
//!
//! ## Non-goals
//!
//! * This module does not sort; an unsorted sequence stays unsorted,
//!   mirrored.

// Internal dependencies
use crate::primitives::events::{SortEvent, SortObserver};

// ============================================================================
// Reverse
// ============================================================================

/// Reverse `seq` in place and emit a single [`SortEvent::Reversed`].
pub fn reverse<T, O>(seq: &mut [T], observer: &mut O)
where
    O: SortObserver,
{
    seq.reverse();
    observer.on_event(SortEvent::Reversed);
}

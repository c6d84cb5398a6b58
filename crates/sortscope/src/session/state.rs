//! Sort session: sequence ownership and the direction state machine.
//!
//! ## Purpose
//!
//! This module ties the pool and the engine together for one interactive
//! lifecycle. The session owns the sequence, a seeded random source, and
//! the direction flag, and it decides which primitive a toggle runs.
//!
//! ## Key concepts
//!
//! * **Lifecycle**: `Unsorted` → first toggle sorts ascending →
//!   `Sorted(Ascending)` → toggle reverses → `Sorted(Descending)` → toggle
//!   reverses → `Sorted(Ascending)` → …
//! * **Sort once, reverse after**: Once sorted, direction flips are a
//!   single reverse; a fresh quicksort runs only after regeneration resets
//!   the state to `Unsorted`.
//!
//! ## Invariants
//!
//! * After a completed cycle the sequence order matches the direction flag.
//! * Regenerating resets the state to `Unsorted`.
//! * Events of a cycle are delivered before the toggle call returns.
//!
//! ## Non-goals
//!
//! * This module does not render, pace, or thread; front ends layer those
//!   concerns on top.
//! * This module does not interpret selections of displayed values; that
//!   rule belongs to the surrounding collaborator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand_pcg::Pcg64;

// Internal dependencies
use crate::algorithms::reverse::reverse;
use crate::engine::executor::{sort, SortReport};
use crate::pool::generator::NumberPool;
use crate::primitives::errors::SortscopeError;
use crate::primitives::events::{NullObserver, SortObserver};
use crate::primitives::policy::GenerationPolicy;

// ============================================================================
// Direction and State
// ============================================================================

/// Materialized order of a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Non-decreasing order.
    Ascending,
    /// Non-increasing order.
    Descending,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Where a session is in its sort lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    /// The sequence has not been sorted since generation.
    Unsorted,
    /// The sequence is sorted in the given direction.
    Sorted(Direction),
}

// ============================================================================
// Sort Session
// ============================================================================

/// One interactive sort lifecycle: a sequence, its random source, and the
/// direction state machine.
#[derive(Debug, Clone)]
pub struct SortSession {
    pool: NumberPool,
    rng: Pcg64,
    sequence: Vec<i32>,
    state: SortState,
}

impl SortSession {
    /// Create an empty, unsorted session.
    pub(crate) fn new(pool: NumberPool, rng: Pcg64) -> Self {
        Self {
            pool,
            rng,
            sequence: Vec::new(),
            state: SortState::Unsorted,
        }
    }

    /// The current working sequence.
    pub fn sequence(&self) -> &[i32] {
        &self.sequence
    }

    /// Where the session is in its sort lifecycle.
    pub fn state(&self) -> SortState {
        self.state
    }

    /// The direction of the last completed cycle, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            SortState::Unsorted => None,
            SortState::Sorted(direction) => Some(direction),
        }
    }

    /// The generation policy this session draws under.
    pub fn policy(&self) -> &GenerationPolicy {
        self.pool.policy()
    }

    /// Replace the sequence with a fresh draw and reset to `Unsorted`.
    ///
    /// Fails with [`SortscopeError::InvalidCount`] when `count` is outside
    /// the policy bounds; the existing sequence is left untouched then.
    pub fn regenerate(&mut self, count: usize) -> Result<(), SortscopeError> {
        self.sequence = self.pool.generate(count, &mut self.rng)?;
        self.state = SortState::Unsorted;
        Ok(())
    }

    /// Run one toggle cycle without observing events.
    pub fn toggle(&mut self) -> SortReport {
        self.toggle_with(&mut NullObserver)
    }

    /// Run one toggle cycle, streaming every step to `observer`.
    ///
    /// An unsorted sequence gets a full ascending quicksort; a sorted one
    /// is reversed into the opposite direction.
    pub fn toggle_with<O: SortObserver>(&mut self, observer: &mut O) -> SortReport {
        match self.state {
            SortState::Unsorted => {
                let report = sort(&mut self.sequence, observer);
                self.state = SortState::Sorted(Direction::Ascending);
                report
            }
            SortState::Sorted(direction) => {
                reverse(&mut self.sequence, observer);
                self.state = SortState::Sorted(direction.flipped());
                SortReport {
                    swaps: 0,
                    partitions: 0,
                    reversed: true,
                }
            }
        }
    }
}

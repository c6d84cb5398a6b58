//! # Sortscope: observable in-place quicksort for Rust
//!
//! Sortscope is a small sorting and number-generation engine designed to sit
//! underneath any front end (GUI, TUI, CLI, web, or headless tests). It sorts
//! a sequence in place with Lomuto quicksort while reporting every partition
//! boundary and swap as an observable event, so a renderer can animate the
//! sort step by step and a test suite can verify every intermediate mutation.
//!
//! ## What it provides
//!
//! * **NumberPool** draws uniformly distributed integers under a range policy
//!   that guarantees at least one low value in every generated sequence.
//! * **Sorting primitives** (`partition`, `sort`, `reverse`) mutate the
//!   sequence in place and stream `SortEvent`s to a `SortObserver` in the
//!   exact order the mutations happen.
//! * **SortSession** owns the sequence and the direction state machine:
//!   the first cycle runs a full ascending quicksort, and every toggle after
//!   that reverses the already-sorted sequence instead of re-sorting.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! // Build a session with a reproducible sequence of 8 numbers.
//! let mut session = Sortscope::new().count(8).seed(42).build()?;
//!
//! // Sort while watching every step.
//! let report = session.toggle_with(&mut |event: SortEvent| {
//!     if let SortEvent::Swapped { a, b } = event {
//!         // animate the swap of positions a and b
//!         let _ = (a, b);
//!     }
//! });
//!
//! assert_eq!(session.state(), SortState::Sorted(Ascending));
//! assert!(session.sequence().windows(2).all(|w| w[0] <= w[1]));
//!
//! // The next toggle flips direction with a single reverse, no re-sort.
//! let flip = session.toggle();
//! assert!(flip.reversed);
//! assert!(!report.reversed);
//! # Result::<(), SortscopeError>::Ok(())
//! ```
//!
//! ## Headless usage
//!
//! The sorting primitives work on any `&mut [T]` where `T: Ord`; no session
//! is required:
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let mut values = vec![10, 3, 15, 7, 8, 23, 74, 18];
//! let report = sort(&mut values, &mut NullObserver);
//!
//! assert_eq!(values, vec![3, 7, 8, 10, 15, 18, 23, 74]);
//! assert!(report.partitions > 0);
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return `Result<_, SortscopeError>`. The only failure a
//! well-behaved caller can trigger is `SortscopeError::InvalidCount` when a
//! generation count falls outside the policy bounds; the engine never retries
//! input on its own.
//!
//! ## Minimal usage (no_std / embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sortscope = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` there is no entropy source, so supply a seed through the
//! builder for varied sequences.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - events, errors, and the generation policy.
mod primitives;

// Layer 2: Algorithms - partitioning and reversal on raw slices.
mod algorithms;

// Layer 3: Engine - validation and the quicksort driver.
mod engine;

// Layer 4: Pool - random sequence generation.
mod pool;

// Layer 5: Session - sequence ownership and the direction state machine.
mod session;

// High-level fluent API for building sort sessions.
mod api;

// Standard sortscope prelude.
pub mod prelude {
    pub use crate::api::{
        Direction,
        Direction::{Ascending, Descending},
        EventLog, GenerationPolicy, NullObserver, NumberPool, SortEvent, SortObserver,
        SortReport, SortSession, SortState, SortscopeBuilder as Sortscope, SortscopeError,
        DISPLAY_COLUMNS, partition, reverse, sort,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod pool {
        pub use crate::pool::*;
    }
    pub mod session {
        pub use crate::session::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

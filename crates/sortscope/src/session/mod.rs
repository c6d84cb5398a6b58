//! Layer 5: Session
//!
//! This layer owns a working sequence and its direction state machine. A
//! session regenerates the sequence through the pool and runs toggle
//! cycles: the first cycle on an unsorted sequence is a full ascending
//! quicksort, and every toggle after that flips direction with a single
//! reverse instead of re-sorting.

// Sequence ownership and the direction state machine.
pub mod state;

pub use state::{Direction, SortSession, SortState};

//! Layer 4: Pool
//!
//! This layer produces the working sequences the engine sorts: uniform
//! integer draws under a policy, with a guaranteed low value in every
//! generated sequence.

// Policy-driven random sequence generation.
pub mod generator;

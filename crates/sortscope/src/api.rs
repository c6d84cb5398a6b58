//! High-level API for building sort sessions.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder that configures the generation policy, the random seed, and an
//! optional initial sequence, then produces a [`SortSession`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; only `build()` can fail.
//! * **Validated**: Counts and duplicate parameter settings are checked
//!   when `build()` is called.
//! * **Reproducible**: A configured seed makes generation deterministic;
//!   without one the session seeds itself from thread-local entropy under
//!   `std` and from a fixed fallback seed otherwise.
//!
//! ### Configuration flow
//!
//! 1. Create a builder via `Sortscope::new()`.
//! 2. Chain configuration methods (`.count()`, `.seed()`, `.policy()`).
//! 3. Call `.build()` to validate and obtain a [`SortSession`].

// External dependencies
use rand::SeedableRng;
use rand_pcg::Pcg64;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::partition::partition;
pub use crate::algorithms::reverse::reverse;
pub use crate::engine::executor::{sort, SortReport};
pub use crate::pool::generator::NumberPool;
pub use crate::primitives::errors::SortscopeError;
pub use crate::primitives::events::{EventLog, NullObserver, SortEvent, SortObserver};
pub use crate::primitives::policy::{GenerationPolicy, DISPLAY_COLUMNS};
pub use crate::session::{Direction, SortSession, SortState};

/// Fallback seed for `no_std` builds with no configured seed.
///
/// Multiplier constant from the PCG family; any fixed value works, callers
/// wanting varied sequences supply a seed.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 6364136223846793005;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring and creating a [`SortSession`].
#[derive(Debug, Clone)]
pub struct SortscopeBuilder {
    /// Length of the initial sequence to generate at build time.
    count: Option<usize>,

    /// Seed for reproducible generation.
    seed: Option<u64>,

    /// Generation policy override.
    policy: Option<GenerationPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl Default for SortscopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SortscopeBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            count: None,
            seed: None,
            policy: None,
            duplicate_param: None,
        }
    }

    /// Generate an initial sequence of this length at build time.
    ///
    /// Without a count the session starts empty and unsorted; call
    /// [`SortSession::regenerate`] to populate it.
    pub fn count(mut self, count: usize) -> Self {
        if self.count.is_some() {
            self.duplicate_param = Some("count");
        }
        self.count = Some(count);
        self
    }

    /// Seed the session's random source for reproducible sequences.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Override the generation policy.
    pub fn policy(mut self, policy: GenerationPolicy) -> Self {
        if self.policy.is_some() {
            self.duplicate_param = Some("policy");
        }
        self.policy = Some(policy);
        self
    }

    /// Validate the configuration and create the session.
    pub fn build(self) -> Result<SortSession, SortscopeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let policy = self.policy.unwrap_or_default();
        let rng = match self.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => entropy_rng(),
        };

        let mut session = SortSession::new(NumberPool::new(policy), rng);
        if let Some(count) = self.count {
            session.regenerate(count)?;
        }
        Ok(session)
    }
}

/// Seed a generator from thread-local entropy.
#[cfg(feature = "std")]
fn entropy_rng() -> Pcg64 {
    Pcg64::from_rng(&mut rand::rng())
}

/// Seed a generator from the fixed fallback seed.
#[cfg(not(feature = "std"))]
fn entropy_rng() -> Pcg64 {
    Pcg64::seed_from_u64(FALLBACK_SEED)
}

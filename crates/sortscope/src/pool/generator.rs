//! Policy-driven random sequence generation.
//!
//! ## Purpose
//!
//! This module generates the working sequence of integers: `count`
//! independent uniform draws from the policy's value range, repaired so
//! that at least one element falls at or below the low-value threshold.
//!
//! ## Design notes
//!
//! * **Explicit randomness**: The random source is a parameter, so callers
//!   seed it for deterministic tests and reproducible sessions.
//! * **Single repair**: When no draw lands at or below the threshold,
//!   exactly one uniformly chosen position is overwritten with a uniform
//!   draw from `[min_value, low_value_threshold]`.
//! * **Stateless**: The pool holds only its policy; nothing shared is
//!   mutated between calls beyond the caller's random source.
//!
//! ## Invariants
//!
//! * The returned sequence has length exactly `count`.
//! * Every element lies in `[min_value, max_value]`.
//! * At least one element is at or below `low_value_threshold`.
//!
//! ## Non-goals
//!
//! * This module does not sort or hold sequences between calls.
//! * This module does not re-prompt on an invalid count; the error is
//!   surfaced to the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::Rng;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SortscopeError;
use crate::primitives::policy::GenerationPolicy;

// ============================================================================
// Number Pool
// ============================================================================

/// Generator of working sequences under a [`GenerationPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberPool {
    policy: GenerationPolicy,
}

impl NumberPool {
    /// Create a pool with the given policy.
    pub fn new(policy: GenerationPolicy) -> Self {
        Self { policy }
    }

    /// The policy this pool draws under.
    pub fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    /// Generate `count` uniform draws satisfying the low-value guarantee.
    ///
    /// Fails with [`SortscopeError::InvalidCount`] when `count` is outside
    /// `[1, max_count]`; the caller is responsible for re-prompting.
    pub fn generate<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<i32>, SortscopeError> {
        Validator::validate_count(count, self.policy.max_count())?;

        let min = self.policy.min_value();
        let max = self.policy.max_value();
        let threshold = self.policy.low_value_threshold();

        let mut sequence: Vec<i32> = (0..count).map(|_| rng.random_range(min..=max)).collect();

        if !sequence.iter().any(|&value| value <= threshold) {
            let slot = rng.random_range(0..count);
            sequence[slot] = rng.random_range(min..=threshold);
        }

        Ok(sequence)
    }
}

//! Input validation for sortscope configuration.
//!
//! ## Purpose
//!
//! This module provides validation for the values callers hand the engine:
//! generation counts and builder configuration. Checks fail fast at the
//! first violation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Boundary-only**: Internal preconditions of the algorithms are
//!   debug-asserted at their call sites, not validated here.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs or re-prompt; recovery is
//!   the caller's responsibility.
//! * This module does not generate or sort anything.

// Internal dependencies
use crate::primitives::errors::SortscopeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sortscope configuration.
///
/// Provides static methods returning `Result<(), SortscopeError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a requested generation count against the policy maximum.
    pub fn validate_count(count: usize, max: usize) -> Result<(), SortscopeError> {
        if count < 1 || count > max {
            return Err(SortscopeError::InvalidCount { got: count, max });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortscopeError> {
        if let Some(param) = duplicate_param {
            return Err(SortscopeError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

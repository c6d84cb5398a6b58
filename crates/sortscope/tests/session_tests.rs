//! Tests for the sort session lifecycle.
//!
//! These tests verify the direction state machine:
//! - First toggle sorts ascending, later toggles reverse
//! - Regeneration resets the lifecycle
//! - The materialized order always matches the direction flag
//!
//! ## Test Organization
//!
//! 1. **Lifecycle** - Unsorted → SortedAscending → SortedDescending → …
//! 2. **Regeneration** - reset semantics and count validation
//! 3. **Events** - what each cycle reports

use sortscope::prelude::*;

fn non_decreasing(seq: &[i32]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

fn non_increasing(seq: &[i32]) -> bool {
    seq.windows(2).all(|w| w[0] >= w[1])
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test the full toggle cycle.
///
/// Sort once ascending, then alternate directions by reversing.
#[test]
fn test_toggle_cycle() {
    let mut session = Sortscope::new().count(40).seed(11).build().unwrap();
    assert_eq!(session.state(), SortState::Unsorted);
    assert_eq!(session.direction(), None);

    let report = session.toggle();
    assert_eq!(session.state(), SortState::Sorted(Ascending));
    assert!(non_decreasing(session.sequence()));
    assert!(!report.reversed, "The first cycle is a sort");

    let report = session.toggle();
    assert_eq!(session.state(), SortState::Sorted(Descending));
    assert!(non_increasing(session.sequence()));
    assert!(report.reversed, "The second cycle is a reverse");
    assert_eq!(report.swaps, 0, "A reverse performs no swaps");

    let report = session.toggle();
    assert_eq!(session.state(), SortState::Sorted(Ascending));
    assert!(non_decreasing(session.sequence()));
    assert!(report.reversed);
}

/// Test that a descending toggle mirrors the ascending order exactly.
#[test]
fn test_toggle_descending_is_mirror() {
    let mut session = Sortscope::new().count(25).seed(12).build().unwrap();

    session.toggle();
    let ascending = session.sequence().to_vec();

    session.toggle();
    let descending = session.sequence().to_vec();

    let mirrored: Vec<i32> = ascending.iter().rev().copied().collect();
    assert_eq!(descending, mirrored);
}

/// Test that toggling preserves the multiset of values.
#[test]
fn test_toggle_preserves_values() {
    let mut session = Sortscope::new().count(30).seed(13).build().unwrap();
    let mut original = session.sequence().to_vec();
    original.sort_unstable();

    for _ in 0..5 {
        session.toggle();
        let mut current = session.sequence().to_vec();
        current.sort_unstable();
        assert_eq!(current, original, "No cycle may add or drop a value");
    }
}

// ============================================================================
// Regeneration Tests
// ============================================================================

/// Test that regeneration resets the lifecycle to unsorted.
#[test]
fn test_regenerate_resets_state() {
    let mut session = Sortscope::new().count(20).seed(14).build().unwrap();

    session.toggle();
    session.toggle();
    assert_eq!(session.state(), SortState::Sorted(Descending));

    session.regenerate(20).unwrap();
    assert_eq!(session.state(), SortState::Unsorted);

    // The next toggle sorts from scratch, ascending again.
    session.toggle();
    assert_eq!(session.state(), SortState::Sorted(Ascending));
    assert!(non_decreasing(session.sequence()));
}

/// Test that a rejected regeneration leaves the session untouched.
#[test]
fn test_regenerate_invalid_count_keeps_sequence() {
    let mut session = Sortscope::new().count(10).seed(15).build().unwrap();
    session.toggle();
    let before = session.sequence().to_vec();

    let result = session.regenerate(0);

    assert_eq!(
        result,
        Err(SortscopeError::InvalidCount { got: 0, max: 1000 })
    );
    assert_eq!(session.sequence(), &before[..], "Sequence should be kept");
    assert_eq!(session.state(), SortState::Sorted(Ascending));
}

/// Test regeneration on an empty session.
#[test]
fn test_regenerate_populates_empty_session() {
    let mut session = Sortscope::new().seed(16).build().unwrap();
    assert!(session.sequence().is_empty());

    session.regenerate(12).unwrap();

    assert_eq!(session.sequence().len(), 12);
    assert_eq!(session.state(), SortState::Unsorted);
}

// ============================================================================
// Event Tests
// ============================================================================

/// Test that the sort cycle streams events and the reverse cycle streams
/// exactly one notification.
#[test]
fn test_toggle_event_streams() {
    let mut session = Sortscope::new().count(15).seed(17).build().unwrap();

    let mut log = EventLog::new();
    session.toggle_with(&mut log);
    assert!(log.partitions() > 0, "A sort partitions at least once");
    assert!(
        !log.events.contains(&SortEvent::Reversed),
        "A sort cycle emits no reverse notification"
    );

    let mut log = EventLog::new();
    session.toggle_with(&mut log);
    assert_eq!(
        log.events,
        vec![SortEvent::Reversed],
        "A reverse cycle emits exactly one event"
    );
}

/// Test that the policy accessors surface the configured constants.
#[test]
fn test_session_policy_accessors() {
    let session = Sortscope::new().seed(18).build().unwrap();
    let policy = session.policy();

    assert_eq!(policy.min_value(), 1);
    assert_eq!(policy.max_value(), 1000);
    assert_eq!(policy.low_value_threshold(), 30);
    assert_eq!(policy.max_count(), 1000);
    assert_eq!(policy.display_columns(), DISPLAY_COLUMNS);
}

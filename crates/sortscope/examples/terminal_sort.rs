//! Terminal front end for the sortscope engine.
//!
//! This example demonstrates the intended layering: the engine owns the
//! sequence and the direction state machine, the front end subscribes to
//! the event stream and redraws. Here the "redraw" is a printed line per
//! observable step.

use sortscope::prelude::*;

fn main() -> Result<(), SortscopeError> {
    println!("{}", "=".repeat(72));
    println!("sortscope terminal demo");
    println!("{}", "=".repeat(72));

    let mut session = Sortscope::new().count(12).seed(2024).build()?;
    println!("generated: {:?}", session.sequence());

    // First toggle: full ascending quicksort, one line per step.
    let report = session.toggle_with(&mut |event: SortEvent| match event {
        SortEvent::Swapped { a, b } if a != b => println!("  swap {a} <-> {b}"),
        SortEvent::Swapped { .. } => {}
        SortEvent::PartitionDecided { low, high, pivot } => {
            println!("  pivot of [{low}, {high}] settled at {pivot}")
        }
        SortEvent::Reversed => println!("  reversed"),
    });
    println!(
        "ascending ({} swaps, {} partitions): {:?}",
        report.swaps,
        report.partitions,
        session.sequence()
    );

    // Second toggle: a single reverse, no re-sort.
    let report = session.toggle();
    assert!(report.reversed);
    println!("descending: {:?}", session.sequence());

    // Regeneration resets the lifecycle; the next toggle sorts again.
    session.regenerate(12)?;
    println!("regenerated: {:?}", session.sequence());
    session.toggle();
    println!("ascending again: {:?}", session.sequence());

    Ok(())
}

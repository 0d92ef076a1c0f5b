//! List rules command implementation.

use go_structural_core::ALL_CHECKERS;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<16} Description", "Rule");
    println!("{}", "-".repeat(80));

    for checker in &ALL_CHECKERS {
        println!("{:<16} {}", checker.name(), checker.description());
    }

    println!("\nAll rules run on every file; the rule set is fixed.");
}

//! List checkers command implementation.

use colored::Colorize;
use djcheck_rules::all_checkers;

/// Runs the list-checkers command.
pub fn run() {
    println!("Available checkers:\n");

    for checker in all_checkers() {
        println!("{}  {}", checker.name().bold(), checker.description());
        for code in checker.codes() {
            println!("  {:<6} {}", code.code.red(), code.description);
        }
        println!();
    }

    println!("Use --select to run specific checkers, e.g.:");
    println!("  djcheck check --select model-form");
    println!("  djcheck check --select DJ06,DJ07");
}

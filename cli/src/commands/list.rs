//! The `list` command - show the case table and the targets.

use std::process::ExitCode;

use spanbench::{CASES, TargetId};

/// Run the list command.
pub fn run() -> ExitCode {
    println!("cases:");
    for case in CASES {
        if case.baseline {
            println!("  {} (baseline)", case.name);
        } else {
            println!("  {}", case.name);
        }
    }
    println!("targets:");
    for id in TargetId::ALL {
        println!("  {id}");
    }
    ExitCode::SUCCESS
}

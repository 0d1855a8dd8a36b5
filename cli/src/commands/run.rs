//! The `run` command - replay the case table under each target.

use std::process::ExitCode;

use spanbench::Harness;

use crate::cli::RunArgs;
use crate::common::output::print_report;

/// Run the run command.
///
/// Exits with failure only when a target could not be set up; access
/// failures are shown in the table but don't affect the exit code.
pub fn run(args: RunArgs, no_color: bool) -> ExitCode {
    let targets = args.targets();
    let cases = args.cases();

    tracing::info!(targets = targets.len(), cases = cases.len(), "starting run");

    let report = Harness::new(&cases).run(&targets);

    if !print_report(&report, no_color) {
        return ExitCode::FAILURE;
    }

    if report.has_setup_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

//! Writing reports to the terminal.

use std::io::Write;

use spanbench::{RenderConfig, Report, render_report_to};

/// Render `report` to stdout. Returns `false` if stdout could not be written.
pub fn print_report(report: &Report, no_color: bool) -> bool {
    let config = RenderConfig { color: !no_color };
    let mut stdout = std::io::stdout().lock();
    match render_report_to(report, &mut stdout, &config).and_then(|_| stdout.flush()) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "failed to write report");
            eprintln!("error: failed to write report: {e}");
            false
        }
    }
}

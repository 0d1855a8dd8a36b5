//! Results table rendering
//!
//! One row per case per target. Failed cases stay in the table, marked
//! `FAILED` with their error, so a broken case can't silently disappear.

use crate::{Report, Row};
use nu_ansi_term::{Color, Style};
use std::io::Write;

/// Configuration for report rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

const HEADERS: [&str; 4] = ["target", "case", "mean/op", "ratio"];

/// Render a report to a writer with the given configuration.
///
/// # Example
/// ```
/// use spanbench::{Harness, RenderConfig, render_report_to};
///
/// let report = Harness::default().run(&[]);
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false };
/// render_report_to(&report, &mut buf, &config).unwrap();
/// assert_eq!(String::from_utf8(buf).unwrap(), "no results\n");
/// ```
pub fn render_report_to(
    report: &Report,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    if report.is_empty() {
        return writeln!(writer, "no results");
    }

    let cells: Vec<[String; 4]> = report.rows().iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = format_line(&HEADERS.map(String::from), &widths);
    writeln!(writer, "{}", paint(config, Style::new().bold(), &header))?;
    let rule: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    writeln!(writer, "{}", "-".repeat(rule))?;

    for (row, line) in report.rows().iter().zip(&cells) {
        let line = format_line(line, &widths);
        let style = if row.is_failed() {
            Color::Red.normal()
        } else if row.baseline {
            Style::new().bold()
        } else {
            Style::new()
        };
        writeln!(writer, "{}", paint(config, style, &line))?;
    }
    Ok(())
}

fn row_cells(row: &Row) -> [String; 4] {
    let (mean, ratio) = match &row.outcome {
        Ok(m) => {
            let ratio = match (row.baseline, m.ratio) {
                (true, _) => "baseline".to_string(),
                (false, Some(r)) => format!("{r:.2}"),
                (false, None) => "?".to_string(),
            };
            (format!("{:.3} ns", m.per_op_ns), ratio)
        }
        Err(e) => ("FAILED".to_string(), e.to_string()),
    };
    [row.target.to_string(), row.case.to_string(), mean, ratio]
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let [target, case, mean, ratio] = cells;
    let line = format!(
        "{target:<w0$} | {case:<w1$} | {mean:>w2$} | {ratio}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
    line.trim_end().to_string()
}

fn paint(config: &RenderConfig, style: Style, text: &str) -> String {
    if config.color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Target, TargetId};
    use pretty_assertions::assert_eq;

    fn render(report: &Report) -> String {
        let mut buf = Vec::new();
        render_report_to(report, &mut buf, &RenderConfig { color: false }).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_report() {
        let report = crate::Harness::default().run(&[]);
        assert_eq!(render(&report), "no results\n");
    }

    #[test]
    fn empty_case_list_says_no_results() {
        let report = crate::Harness::new(&[]).run(&[Target::new(TargetId::Opaque)]);
        assert_eq!(render(&report), "no results\n");
    }

    #[test]
    fn failed_rows_are_rendered() {
        let report = crate::Harness::default().run(&[Target::new(TargetId::Opaque).with_length(0)]);
        let out = render(&report);
        let lines: Vec<_> = out.lines().collect();

        // header, rule, one line per case
        assert_eq!(lines.len(), 2 + crate::CASES.len());
        assert!(lines[0].starts_with("target"));
        assert!(lines[1].chars().all(|c| c == '-'));
        for line in &lines[2..] {
            assert!(line.starts_with("opaque"), "{line}");
            assert!(line.contains("FAILED"), "{line}");
            assert!(line.contains("buffer length must be non-zero"), "{line}");
        }
    }

    #[test]
    fn successful_rows_show_mean_and_baseline() {
        let target = Target::new(TargetId::Transparent)
            .with_length(4)
            .with_loops(1)
            .with_iterations(1)
            .with_warmup(0);
        let report = crate::Harness::default().run(&[target]);
        let out = render(&report);

        let baseline = out.lines().find(|l| l.contains("array_get")).unwrap();
        assert!(baseline.contains("baseline"), "{baseline}");
        assert!(baseline.contains(" ns"), "{baseline}");
        assert!(!out.contains("FAILED"));
    }

    #[test]
    fn color_wraps_lines_in_escapes() {
        let report = crate::Harness::default().run(&[Target::new(TargetId::Opaque).with_length(0)]);
        let mut buf = Vec::new();
        render_report_to(&report, &mut buf, &RenderConfig { color: true }).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}["));
    }
}

use core::time::Duration;

use crate::Error;
use crate::bench::target::TargetId;

/// Timing of one successful case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Wall-clock time of all timed invocations.
    pub elapsed: Duration,
    /// Element accesses made during `elapsed`.
    pub ops: u64,
    /// Mean cost of one element access, in nanoseconds.
    pub per_op_ns: f64,
    /// `per_op_ns` divided by the baseline's, within the same target.
    ///
    /// `None` when the baseline failed or measured zero.
    pub ratio: Option<f64>,
}

impl Measurement {
    pub(crate) fn new(elapsed: Duration, ops: u64) -> Self {
        let per_op_ns = if ops == 0 {
            0.0
        } else {
            elapsed.as_nanos() as f64 / ops as f64
        };
        Self {
            elapsed,
            ops,
            per_op_ns,
            ratio: None,
        }
    }
}

/// Result of one case under one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub target: TargetId,
    pub case: &'static str,
    pub baseline: bool,
    pub outcome: Result<Measurement, Error>,
}

impl Row {
    pub fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Rows in execution order: targets in the order given, cases in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<Row>,
}

impl Report {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_failed())
    }

    /// True if any target aborted because its buffer or views could not be built.
    pub fn has_setup_failures(&self) -> bool {
        self.failures()
            .any(|row| matches!(&row.outcome, Err(e) if e.is_setup()))
    }

    pub fn for_target(&self, target: TargetId) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |row| row.target == target)
    }

    /// Appends the rows of one target, filling in ratios against its baseline.
    pub(crate) fn push_target(&mut self, mut rows: Vec<Row>) {
        let baseline = rows
            .iter()
            .find(|row| row.baseline)
            .and_then(|row| row.outcome.as_ref().ok())
            .map(|m| m.per_op_ns)
            .filter(|ns| *ns > 0.0);

        if let Some(base) = baseline {
            for row in &mut rows {
                if let Ok(m) = &mut row.outcome {
                    m.ratio = Some(m.per_op_ns / base);
                }
            }
        }
        self.rows.extend(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(case: &'static str, baseline: bool, outcome: Result<Measurement, Error>) -> Row {
        Row {
            target: TargetId::Opaque,
            case,
            baseline,
            outcome,
        }
    }

    #[test]
    fn ratios_relative_to_baseline() {
        let mut report = Report::default();
        report.push_target(vec![
            row("a", true, Ok(Measurement::new(Duration::from_nanos(200), 100))),
            row("b", false, Ok(Measurement::new(Duration::from_nanos(600), 100))),
        ]);

        let ratios: Vec<_> = report
            .rows()
            .iter()
            .map(|r| r.outcome.as_ref().unwrap().ratio)
            .collect();
        assert_eq!(ratios, [Some(1.0), Some(3.0)]);
        assert_eq!(report.rows()[1].outcome.as_ref().unwrap().per_op_ns, 6.0);
    }

    #[test]
    fn failed_baseline_leaves_ratios_empty() {
        let mut report = Report::default();
        report.push_target(vec![
            row("a", true, Err(Error::Access { index: 1, len: 1 })),
            row("b", false, Ok(Measurement::new(Duration::from_nanos(600), 100))),
        ]);

        assert_eq!(report.rows()[1].outcome.as_ref().unwrap().ratio, None);
        assert_eq!(report.failures().count(), 1);
        assert!(!report.has_setup_failures());
    }

    #[test]
    fn setup_failures_detected() {
        let mut report = Report::default();
        report.push_target(vec![row("a", true, Err(Error::setup("nope")))]);
        assert!(report.has_setup_failures());
        assert_eq!(report.for_target(TargetId::Opaque).count(), 1);
        assert_eq!(report.for_target(TargetId::Transparent).count(), 0);
    }

    #[test]
    fn zero_ops_measure_zero() {
        let m = Measurement::new(Duration::from_nanos(5), 0);
        assert_eq!(m.per_op_ns, 0.0);
    }
}

use std::time::Instant;

use crate::bench::case::{CASES, Case};
use crate::bench::fixture::{FILL, Fixture};
use crate::bench::report::{Measurement, Report, Row};
use crate::bench::target::Target;
use crate::views::Buffer;
use crate::{Error, Result};

/// Runs a case table under a list of targets.
///
/// Each case goes through its own setup, run and teardown; nothing is
/// shared between cases. A setup failure aborts the rest of that target,
/// an access failure only the case it happened in.
#[derive(Debug, Clone, Copy)]
pub struct Harness<'c> {
    cases: &'c [Case],
}

impl Default for Harness<'static> {
    fn default() -> Self {
        Self::new(CASES)
    }
}

impl<'c> Harness<'c> {
    pub fn new(cases: &'c [Case]) -> Self {
        Self { cases }
    }

    pub fn cases(&self) -> &'c [Case] {
        self.cases
    }

    pub fn run(&self, targets: &[Target]) -> Report {
        let mut report = Report::default();
        for target in targets {
            report.push_target(self.run_target(target));
        }
        report
    }

    fn run_target(&self, target: &Target) -> Vec<Row> {
        tracing::info!(
            target_id = %target.id,
            length = target.length,
            loops = target.loops,
            cases = self.cases.len(),
            "running target"
        );

        let mut rows = Vec::with_capacity(self.cases.len());
        let mut cases = self.cases.iter();

        while let Some(case) = cases.next() {
            let outcome = measure(case, target);
            match &outcome {
                Ok(m) => tracing::debug!(
                    case = case.name,
                    target_id = %target.id,
                    per_op_ns = m.per_op_ns,
                    "case finished"
                ),
                Err(e) => tracing::warn!(case = case.name, target_id = %target.id, error = %e, "case failed"),
            }

            let aborted = match &outcome {
                Err(e) if e.is_setup() => Some(e.clone()),
                _ => None,
            };
            rows.push(row(target, case, outcome));

            if let Some(err) = aborted {
                // Everything after a setup failure is reported with the same error.
                rows.extend(cases.by_ref().map(|case| row(target, case, Err(err.clone()))));
                break;
            }
        }
        rows
    }
}

fn row(target: &Target, case: &Case, outcome: Result<Measurement, Error>) -> Row {
    Row {
        target: target.id,
        case: case.name,
        baseline: case.baseline,
        outcome,
    }
}

/// Setup, warmup, timed run. The buffer is dropped on return.
fn measure(case: &Case, target: &Target) -> Result<Measurement> {
    target.validate()?;
    let buffer = Buffer::filled(target.length, FILL)?;
    let fixture = Fixture::new(&buffer)?;

    for _ in 0..target.warmup {
        (case.routine)(&fixture, target)?;
    }

    let start = Instant::now();
    for _ in 0..target.iterations {
        (case.routine)(&fixture, target)?;
    }
    let elapsed = start.elapsed();

    let ops = u64::from(target.iterations) * target.ops_per_invoke();
    Ok(Measurement::new(elapsed, ops))
}

#[cfg(test)]
#[path = "harness_test.rs"]
mod harness_test;

//! Targets: the configurations a case table is replayed under.

use core::fmt;

use crate::{Error, Result};

/// Elements per buffer unless overridden.
pub const DEFAULT_LENGTH: usize = 100;
/// Passes over the buffer per invocation unless overridden.
pub const DEFAULT_LOOPS: usize = 1000;
/// Timed invocations per case unless overridden.
pub const DEFAULT_ITERATIONS: u32 = 20;
/// Untimed invocations before timing starts unless overridden.
pub const DEFAULT_WARMUP: u32 = 2;

/// Identifies how a routine is compiled into its timing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetId {
    /// Indices and values pass through `black_box`; no access can be elided.
    Opaque,
    /// No optimisation barrier; the compiler may hoist or drop accesses.
    Transparent,
}

impl TargetId {
    pub const ALL: [TargetId; 2] = [TargetId::Opaque, TargetId::Transparent];

    pub const fn name(self) -> &'static str {
        match self {
            TargetId::Opaque => "opaque",
            TargetId::Transparent => "transparent",
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A target together with the run parameters its cases use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    pub length: usize,
    pub loops: usize,
    pub iterations: u32,
    pub warmup: u32,
}

impl Target {
    pub fn new(id: TargetId) -> Self {
        Self {
            id,
            length: DEFAULT_LENGTH,
            loops: DEFAULT_LOOPS,
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
        }
    }

    /// One target per [`TargetId`], all with default parameters.
    pub fn all() -> Vec<Self> {
        TargetId::ALL.into_iter().map(Self::new).collect()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_loops(mut self, loops: usize) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }

    /// Element accesses made by one invocation of a routine.
    pub fn ops_per_invoke(&self) -> u64 {
        self.loops as u64 * self.length as u64
    }

    /// Rejects parameters that would make the measurement meaningless.
    ///
    /// Buffer length is checked when the buffer is built.
    pub fn validate(&self) -> Result<()> {
        if self.loops == 0 {
            return Err(Error::setup("loops must be non-zero"));
        }
        if self.iterations == 0 {
            return Err(Error::setup("iterations must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let target = Target::new(TargetId::Opaque);
        assert_eq!(target.length, 100);
        assert_eq!(target.loops, 1000);
        assert_eq!(target.ops_per_invoke(), 100_000);
        assert!(target.validate().is_ok());
    }

    #[test]
    fn all_targets_in_order() {
        let ids: Vec<_> = Target::all().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, [TargetId::Opaque, TargetId::Transparent]);
    }

    #[test]
    fn zero_loops_or_iterations_rejected() {
        let target = Target::new(TargetId::Opaque).with_loops(0);
        assert!(target.validate().unwrap_err().is_setup());

        let target = Target::new(TargetId::Opaque).with_iterations(0);
        assert!(target.validate().unwrap_err().is_setup());
    }

    #[test]
    fn builder_overrides() {
        let target = Target::new(TargetId::Transparent)
            .with_length(8)
            .with_loops(3)
            .with_iterations(5)
            .with_warmup(0);
        assert_eq!(target.ops_per_invoke(), 24);
        assert_eq!(target.iterations, 5);
        assert_eq!(target.warmup, 0);
        assert_eq!(target.id.to_string(), "transparent");
    }
}

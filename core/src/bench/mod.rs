//! Configuration-driven micro-benchmark harness.
//!
//! A [`Harness`] replays a table of [`Case`]s once per [`Target`]:
//!
//! ```text
//! for target in targets:
//!     for case in cases:
//!         Setup    -> Buffer + every view (Fixture)
//!         Run      -> warmup, then `iterations` timed invocations
//!         Teardown -> drop the fixture
//! ```
//!
//! Per-operation cost is the elapsed time divided by
//! `iterations * loops * length`, and each target's rows carry a ratio to
//! that target's baseline case.
//!
//! # Example
//!
//! ```
//! use spanbench_core::bench::{Harness, Target, TargetId};
//!
//! let target = Target::new(TargetId::Opaque).with_loops(1).with_iterations(1);
//! let report = Harness::default().run(&[target]);
//! assert_eq!(report.len(), 12);
//! assert!(report.failures().next().is_none());
//! ```

pub mod case;
pub mod fixture;
pub mod harness;
pub mod report;
pub mod routine;
pub mod target;

pub use case::{CASES, Case, Op, Routine};
pub use fixture::Fixture;
pub use harness::Harness;
pub use report::{Measurement, Report, Row};
pub use target::{Target, TargetId};

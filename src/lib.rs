//! spanbench - how much does an abstraction cost per indexed access?
//!
//! # Overview
//!
//! spanbench times tight get/set loops through four accessors over the same
//! fixed-length character buffer:
//!
//! - a direct array view
//! - a windowed segment (offset + length)
//! - a text view
//! - a non-owning span built from any of the above
//!
//! and reports the mean cost per element access relative to a baseline.
//!
//! # Quick Start
//!
//! ```
//! use spanbench::{Harness, RenderConfig, Target, TargetId, render_report_to};
//!
//! let target = Target::new(TargetId::Opaque).with_loops(10).with_iterations(2);
//! let report = Harness::default().run(&[target]);
//! assert_eq!(report.len(), spanbench::CASES.len());
//!
//! let mut out = Vec::new();
//! render_report_to(&report, &mut out, &RenderConfig { color: false }).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("array_get"));
//! ```
//!
//! # Views
//!
//! All views alias the buffer; a write through one is visible through all:
//!
//! ```
//! use spanbench::views::{Buffer, ElementAccess, SpanView};
//!
//! let buffer = Buffer::from_text("span").unwrap();
//! let segment = buffer.segment(1, 3).unwrap();
//! SpanView::from(&segment).set(0, 'P').unwrap();
//! assert_eq!(buffer.text().to_string(), "sPan");
//! ```

// Report rendering utilities
pub mod report_renderer;
pub use report_renderer::{RenderConfig, render_report_to};

// Re-export public API from spanbench_core
pub use spanbench_core::bench::{
    self, CASES, Case, Harness, Measurement, Op, Report, Row, Target, TargetId,
};
pub use spanbench_core::views;
pub use spanbench_core::{Error, Result};

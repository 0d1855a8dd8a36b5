//! Views over a shared character buffer and a harness for timing indexed
//! access through them.
//!
//! - [`views`]: the buffer and its accessors (array, segment, text, span)
//! - [`bench`]: case table, targets, and the runner producing a [`bench::Report`]

pub mod bench;
pub mod error;
pub mod views;

pub use error::{Error, Result};

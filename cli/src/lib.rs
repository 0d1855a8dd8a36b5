//! Command-line front end for the view benchmarks.
//!
//! `cli` holds the clap definitions, `commands` one module per subcommand,
//! and `common` the report printing shared between them. The binary in
//! `main.rs` only sets up logging and dispatches.

pub mod cli;
pub mod commands;
pub mod common;

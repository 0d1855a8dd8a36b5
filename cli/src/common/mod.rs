//! Common utilities shared across CLI commands.

pub mod output;

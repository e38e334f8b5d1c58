//! CLI module
//!
//! Command-line interface: lists every event of a group and prints the
//! canonical events as a JSON array on stdout. Logs go to stderr.

mod commands;
mod runner;

pub use commands::{Cli, StallArg};
pub use runner::Runner;

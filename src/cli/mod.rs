//! CLI module
//!
//! Argument parsing and the run loop: authenticate, then stream the machine
//! listing to stdout. Errors are logged here, at the boundary, and
//! propagated to `main` — never swallowed.

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;

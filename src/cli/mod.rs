//! CLI module for clientfolio
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - start: Open the store and serve HTTP until interrupted

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};

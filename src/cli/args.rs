//! CLI argument definitions using clap
//!
//! Commands:
//! - clientfolio init [--config <path>]
//! - clientfolio start [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clientfolio - client and asset records service
#[derive(Parser, Debug)]
#[command(name = "clientfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a configuration file with default values
    Init {
        /// Path of the configuration file to create
        #[arg(long, default_value = "./clientfolio.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults and environment apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override, takes precedence over file and environment
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI argument definitions using clap
//!
//! Commands:
//! - recordkeeper init --config <path>
//! - recordkeeper serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recordkeeper - a small record-keeping service
#[derive(Parser, Debug)]
#[command(name = "recordkeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file and create the records table
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./recordkeeper.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply when it does not exist
        #[arg(long, default_value = "./recordkeeper.json")]
        config: PathBuf,

        /// Port to bind, overriding the configuration file
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

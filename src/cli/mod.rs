//! CLI module for recordkeeper
//!
//! Provides command-line interface for:
//! - init: write a default configuration and create the records table
//! - serve: run the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};

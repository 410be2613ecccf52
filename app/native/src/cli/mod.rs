//! Command-line interface.
//!
//! - [`commands`] - Clap command definitions and their execution

pub mod commands;

use clap::Parser;

pub use commands::Cli;

use crate::core::Result;

/// Parses the process arguments and runs the selected command.
///
/// # Errors
///
/// Returns the error of the executed command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::try_init();
    cli.execute()
}

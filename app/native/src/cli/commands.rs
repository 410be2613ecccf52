//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments.

pub mod demo;

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use colored::Colorize;

use crate::config;
use crate::core::constants::APP_VERSION;
use crate::core::{Error, Result};

pub use demo::DemoArgs;

/// uibot CLI - Drive the in-process toolkit and inspect the configuration.
#[derive(Parser, Debug)]
#[command(name = "uibot")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run the demo scenario.
    ///
    /// Builds a workbench window with an expand bar, expands and collapses its
    /// sections, then clicks a button that opens a dialog and waits for it.
    #[command(
        verbatim_doc_comment,
        after_long_help = r#"Examples:
  uibot demo                       # Run with the configured wait budget
  uibot demo --timeout-ms 500      # Fail faster when the dialog never shows
  uibot demo --dialog-delay-ms 2000"#
    )]
    Demo(DemoArgs),

    /// Print the resolved configuration.
    ///
    /// Outputs the configuration as JSON, with defaults filled in, and the path
    /// of the file it was read from.
    Config,

    /// Output uibot configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// uibot configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(uibot completions --shell zsh)"
    ///   uibot completions --shell bash > ~/.local/share/bash-completion/completions/uibot
    ///   uibot completions --shell fish > ~/.config/fish/completions/uibot.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails to execute.
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Demo(args) => demo::execute(args)?,
            Commands::Config => Self::print_config()?,
            Commands::Schema => println!("{}", config::generate_schema_json()),
            Commands::Completions { shell } => Self::print_completions(*shell),
        }

        Ok(())
    }

    fn print_config() -> Result<()> {
        let (config, path) = config::load_or_default()?;
        match path {
            Some(path) => eprintln!("{} {}", "Loaded from".dimmed(), path.display()),
            None => eprintln!("{}", "No configuration file found, using defaults".dimmed()),
        }
        let json = serde_json::to_string_pretty(&config).map_err(Error::from)?;
        println!("{json}");
        Ok(())
    }

    /// Generate shell completions.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "uibot", &mut io::stdout());
    }
}

//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::workout;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "liftmark")]
#[command(author, version, about = "Parse and validate LiftMark workout documents")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a workout and print the resulting template
    Parse {
        /// Workout file, or `-` for stdin
        file: PathBuf,
    },

    /// Validate a workout and report errors and warnings
    Check {
        /// Workout file, or `-` for stdin
        file: PathBuf,

        /// Fail when any warning is reported
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Print a workout in canonical LMWF form
    Fmt {
        /// Workout file, or `-` for stdin
        file: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "liftmark=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("LiftMark starting");
    if let Some(root) = &config.project_root {
        output.verbose_ctx("config", &format!("Using project config at: {}", root.display()));
    }

    match cli.command {
        Commands::Parse { file } => {
            output.verbose_ctx("parse", &format!("Parsing: {}", file.display()));
            workout::parse(&output, &config, &file)?
        }

        Commands::Check { file, deny_warnings } => {
            let deny = deny_warnings || config.project.deny_warnings;
            output.verbose_ctx(
                "check",
                &format!("Checking: {}, deny_warnings={}", file.display(), deny),
            );
            workout::check(&output, &config, &file, deny)?
        }

        Commands::Fmt { file } => {
            output.verbose_ctx("fmt", &format!("Formatting: {}", file.display()));
            workout::fmt(&output, &config, &file)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

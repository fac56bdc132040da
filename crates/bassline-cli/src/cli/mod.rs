//! CLI for the bassline provisioner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_install, run_list};

/// Top-level CLI for the bassline provisioner.
#[derive(Debug, Parser)]
#[command(name = "bassline")]
#[command(about = "bassline: installs prebuilt BASS native libraries into a game checkout", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every BASS archive and place its library in the checkout.
    Install {
        /// Destination library root. Defaults to Assets/Plugins/BassNative
        /// under the current directory.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// Where temporary extraction directories are created (removed at the
        /// end of the run). Defaults to the current directory.
        #[arg(long, value_name = "DIR")]
        scratch: Option<PathBuf>,
    },

    /// Show the archives and destinations that `install` provisions.
    List {
        /// Emit the manifest as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        match cli.command {
            CliCommand::Install { dest, scratch } => run_install(dest, scratch)?,
            CliCommand::List { json } => run_list(json)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }
        Ok(())
    }
}

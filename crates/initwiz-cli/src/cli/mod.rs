//! CLI for the Initwiz starter-project wizard.

mod commands;
mod host;

use anyhow::Result;
use clap::{Parser, Subcommand};
use initwiz_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_detect, run_fetch, run_generate, run_materialize};

/// Top-level CLI for the Initwiz starter-project wizard.
#[derive(Debug, Parser)]
#[command(name = "initwiz")]
#[command(about = "Initwiz: materialize starter projects from generator services", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a generate URL and materialize the project in one go.
    Generate {
        /// Full generate URL copied from the service page (with its query).
        url: String,
        /// Directory to create the project in (default: ./<project-name>).
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Download the generated archive only and print where it was saved.
    Fetch {
        /// Full generate URL copied from the service page.
        url: String,
    },

    /// Materialize a project from a starter archive already on disk.
    Materialize {
        /// Path to the starter zip.
        archive: PathBuf,
        /// Directory to create the project in (default: ./<project-name>).
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
        /// Project name (default: the archive file stem).
        #[arg(long)]
        name: Option<String>,
    },

    /// Report which build system a project directory uses.
    Detect {
        /// Project directory to probe.
        dir: PathBuf,
    },

    /// Compute SHA-256 of a downloaded archive.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate { url, dest } => run_generate(&cfg, &url, dest.as_deref())?,
            CliCommand::Fetch { url } => run_fetch(&cfg, &url)?,
            CliCommand::Materialize {
                archive,
                dest,
                name,
            } => run_materialize(&archive, dest.as_deref(), name.as_deref())?,
            CliCommand::Detect { dir } => run_detect(&dir)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

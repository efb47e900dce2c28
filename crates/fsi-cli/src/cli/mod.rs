//! CLI for the FSI soundfont installer.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fsi_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_install, run_status};

/// Top-level CLI for the FSI soundfont installer.
#[derive(Debug, Parser)]
#[command(name = "fsi")]
#[command(about = "FSI: FluidSynth default soundfont installer", long_about = None)]
pub struct Cli {
    /// With no subcommand, `fsi` runs `install`.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Provision ~/.fluidsynth and download the default soundfont.
    Install,

    /// List the soundfont directory without downloading anything.
    Status,

    /// Compute SHA-256 of a file (defaults to the installed soundfont).
    Checksum {
        /// Path to the file; omitted = ~/.fluidsynth/default_sound_font.sf2.
        path: Option<PathBuf>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or(CliCommand::Install) {
            CliCommand::Install => run_install(&cfg)?,
            CliCommand::Status => run_status()?,
            CliCommand::Checksum { path } => run_checksum(path.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

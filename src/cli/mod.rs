//! Command-line interface.

pub mod check;
pub mod completions;
pub mod doctor;
pub mod init;
pub mod output;
pub mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keyfob - release-signing configuration for Android app projects.
#[derive(Parser)]
#[command(
    name = "keyfob",
    about = "Release-signing configuration manager for Android app projects",
    version,
    after_help = "Keep the keys on you. 🔑"
)]
pub struct Cli {
    /// Project root directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Scaffold keyfob.toml and android/key.properties
    Init {
        /// Reverse-DNS application id (e.g. com.example.app)
        #[arg(long, value_name = "ID")]
        app_id: Option<String>,

        /// Keystore file name, relative to android/
        #[arg(long, default_value = "release.keystore", value_name = "FILE")]
        store_file: String,

        /// Key alias inside the keystore
        #[arg(long, value_name = "ALIAS")]
        key_alias: Option<String>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate signing config and build metadata
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration (passwords redacted)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Print passwords in plaintext
        #[arg(long)]
        reveal: bool,
    },

    /// Diagnose the signing environment
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, project: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let project_dir = project.unwrap_or_else(|| PathBuf::from("."));

    match command {
        Init {
            app_id,
            store_file,
            key_alias,
            force,
        } => init::execute(&project_dir, app_id, &store_file, key_alias, force),
        Check { json } => check::execute(&project_dir, json),
        Show { json, reveal } => show::execute(&project_dir, json, reveal),
        Doctor => doctor::execute(&project_dir),
        Completions { shell } => completions::execute(shell),
    }
}

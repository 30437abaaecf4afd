//! CLI adapter for docsplit
//!
//! Provides the command-line interface over the core loaders and
//! splitter. Depends on `core/`; `core/` never depends on it.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::services::Services;

/// docsplit - load documents and split them into overlapping chunks
///
/// Reads .txt and .pdf files from a file or directory tree and cuts
/// the text into fixed-size character windows for embedding.
#[derive(Parser, Debug)]
#[command(name = "docsplit")]
#[command(version)]
#[command(about = "Document loader and character splitter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (defaults to the XDG config location)
    #[arg(long, global = true, env = "DOCSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load documents and report what was read
    Load(commands::LoadArgs),

    /// Load documents and split them into chunks
    Split(commands::SplitArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsplit completions bash > ~/.local/share/bash-completion/completions/docsplit
    ///   zsh:   docsplit completions zsh > ~/.zfunc/_docsplit
    ///   fish:  docsplit completions fish > ~/.config/fish/completions/docsplit.fish
    Completions(commands::CompletionsArgs),
}

/// Resolve configuration from an explicit file or the default locations
pub fn load_config(explicit: Option<&PathBuf>) -> crate::core::error::Result<Config> {
    match explicit {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config.validate()?;
            Ok(config)
        }
        None => Config::load(),
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Completions don't need configuration
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = load_config(cli.config.as_ref())?;
    config.log_config();

    let services = Services::new(config);

    match cli.command {
        Commands::Load(args) => commands::load::execute(args, &services, cli.format),
        Commands::Split(args) => commands::split::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

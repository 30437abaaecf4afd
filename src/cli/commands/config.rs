//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::capabilities::Capabilities;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show the exclude patterns
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub config_file_exists: bool,
    pub splitter: SplitterSection,
    pub loader: LoaderSection,
    pub capabilities: Capabilities,
}

#[derive(Debug, Serialize)]
pub struct SplitterSection {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Serialize)]
pub struct LoaderSection {
    pub encoding: String,
    pub max_file_size_mb: usize,
    pub exclude_patterns: Vec<String>,
}

/// Execute the show-config command
pub fn execute(
    args: ConfigArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = crate::core::xdg::XdgDirs::new().config_file();

    let response = ConfigResponse {
        config_file: config_file.to_string_lossy().into_owned(),
        config_file_exists: config_file.exists(),
        splitter: SplitterSection {
            chunk_size: config.splitter.chunk_size,
            chunk_overlap: config.splitter.chunk_overlap,
        },
        loader: LoaderSection {
            encoding: config.loader.encoding.clone(),
            max_file_size_mb: config.loader.max_file_size_mb,
            exclude_patterns: config.loader.exclude_patterns.clone(),
        },
        capabilities: services.capabilities,
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!(
                "  config_file: {}{}",
                response.config_file,
                if response.config_file_exists {
                    ""
                } else {
                    " (not found)"
                }
            );
            println!("  splitter:");
            println!("    chunk_size: {}", response.splitter.chunk_size);
            println!("    chunk_overlap: {}", response.splitter.chunk_overlap);
            println!("  loader:");
            println!("    encoding: {}", response.loader.encoding);
            println!("    max_file_size_mb: {}", response.loader.max_file_size_mb);
            if args.all {
                println!(
                    "    exclude_patterns: {:?}",
                    response.loader.exclude_patterns
                );
            }
            println!("  capabilities:");
            println!("    pdf: {}", response.capabilities.pdf);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

//! Load command - read documents and report per-file outcomes

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{FileOutcome, LoadReport};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// File or directory to load
    pub path: PathBuf,

    /// Text encoding label (e.g. utf-8, latin1, utf-16le)
    #[arg(long, short = 'E')]
    pub encoding: Option<String>,

    /// List every file, not only skipped and failed ones
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Status of one file in the load response
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Loaded,
    Skipped,
    Failed,
}

/// One file in the load response
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Load result response
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub path: String,
    pub documents: usize,
    pub total_chars: usize,
    pub skipped: usize,
    pub failed: usize,
    pub duration_secs: f64,
    pub files: Vec<FileSummary>,
}

impl LoadResponse {
    /// Summarize a load report
    pub fn from_report(path: &str, report: &LoadReport, duration_secs: f64) -> Self {
        let files: Vec<FileSummary> = report
            .files
            .iter()
            .map(|file| {
                let path = file.path.display().to_string();
                match &file.outcome {
                    FileOutcome::Loaded { chars } => FileSummary {
                        path,
                        status: FileStatus::Loaded,
                        chars: Some(*chars),
                        detail: None,
                    },
                    FileOutcome::Skipped(reason) => FileSummary {
                        path,
                        status: FileStatus::Skipped,
                        chars: None,
                        detail: Some(reason.to_string()),
                    },
                    FileOutcome::Failed(error) => FileSummary {
                        path,
                        status: FileStatus::Failed,
                        chars: None,
                        detail: Some(error.to_string()),
                    },
                }
            })
            .collect();

        let count = |status: FileStatus| files.iter().filter(|f| f.status == status).count();

        Self {
            path: path.to_string(),
            documents: report.loaded_count(),
            total_chars: files.iter().filter_map(|f| f.chars).sum(),
            skipped: count(FileStatus::Skipped),
            failed: count(FileStatus::Failed),
            duration_secs,
            files,
        }
    }
}

/// Execute the load command
pub fn execute(
    args: LoadArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = services.create_loader(&args.path, args.encoding.as_deref())?;

    let start = Instant::now();
    let report = loader.load()?;
    let duration_secs = start.elapsed().as_secs_f64();

    let response =
        LoadResponse::from_report(&args.path.display().to_string(), &report, duration_secs);

    match format {
        OutputFormat::Human => print_human(&response, args.verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(response: &LoadResponse, verbose: bool) {
    for file in &response.files {
        match file.status {
            FileStatus::Failed => print_warning(&format!(
                "Could not load file {}: {}",
                file.path,
                file.detail.as_deref().unwrap_or_default()
            )),
            FileStatus::Skipped if verbose => println!(
                "  {} {} ({})",
                colors::dim("skipped"),
                colors::file_path(&file.path),
                file.detail.as_deref().unwrap_or_default()
            ),
            FileStatus::Loaded if verbose => println!(
                "  {} {} ({} chars)",
                colors::success("loaded"),
                colors::file_path(&file.path),
                colors::number(&file.chars.unwrap_or_default().to_string())
            ),
            _ => {}
        }
    }

    println!(
        "{} {} documents ({} chars) from {} in {}",
        colors::success("Loaded"),
        colors::number(&response.documents.to_string()),
        colors::number(&response.total_chars.to_string()),
        colors::file_path(&response.path),
        colors::number(&format_duration(response.duration_secs))
    );

    if response.skipped > 0 || response.failed > 0 {
        println!(
            "{} skipped, {} failed",
            colors::number(&response.skipped.to_string()),
            colors::number(&response.failed.to_string())
        );
    }
}

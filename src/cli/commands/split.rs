//! Split command - load documents and cut them into chunks

use crate::cli::output::{colors, format_duration, print_warning, CHUNK_SEPARATOR};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// File or directory to load
    pub path: PathBuf,

    /// Characters per chunk (overrides config)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks (overrides config)
    #[arg(long)]
    pub chunk_overlap: Option<usize>,

    /// Text encoding label (e.g. utf-8, latin1, utf-16le)
    #[arg(long, short = 'E')]
    pub encoding: Option<String>,

    /// Number of chunks to preview from each end
    #[arg(long, default_value = "2")]
    pub preview: usize,

    /// Print every chunk instead of a preview
    #[arg(long)]
    pub all: bool,
}

/// A chunk in the split response
#[derive(Debug, Serialize)]
pub struct ChunkItem {
    pub index: usize,
    pub chars: usize,
    pub text: String,
}

/// Split result response
#[derive(Debug, Serialize)]
pub struct SplitResponse {
    pub path: String,
    pub documents: usize,
    pub failed: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub total_chunks: usize,
    pub duration_secs: f64,
    pub chunks: Vec<ChunkItem>,
}

/// Indices of the first `n` and last `n` chunks out of `total`, in order.
///
/// Overlapping ends are only listed once.
pub fn boundary_indices(total: usize, n: usize) -> Vec<usize> {
    if n.saturating_mul(2) >= total {
        return (0..total).collect();
    }
    (0..n).chain(total - n..total).collect()
}

/// Execute the split command
pub fn execute(
    args: SplitArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = services.create_loader(&args.path, args.encoding.as_deref())?;
    let splitter = services.create_splitter(args.chunk_size, args.chunk_overlap)?;

    let start = Instant::now();
    let report = loader.load()?;
    let failed = report.failures().count();
    let documents = report.loaded_count();
    let chunks = splitter.split_texts(&report.documents);
    let duration_secs = start.elapsed().as_secs_f64();

    let indices = if args.all {
        (0..chunks.len()).collect()
    } else {
        boundary_indices(chunks.len(), args.preview)
    };

    let response = SplitResponse {
        path: args.path.display().to_string(),
        documents,
        failed,
        chunk_size: splitter.chunk_size(),
        chunk_overlap: splitter.chunk_overlap(),
        total_chunks: chunks.len(),
        duration_secs,
        chunks: indices
            .into_iter()
            .map(|index| ChunkItem {
                index,
                chars: chunks[index].chars().count(),
                text: chunks[index].clone(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => print_human(&response),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(response: &SplitResponse) {
    if response.failed > 0 {
        print_warning(&format!(
            "{} files could not be loaded (see log for details)",
            response.failed
        ));
    }

    println!(
        "Number of chunks: {} (from {} documents, size {}, overlap {}) in {}",
        colors::number(&response.total_chunks.to_string()),
        colors::number(&response.documents.to_string()),
        colors::number(&response.chunk_size.to_string()),
        colors::number(&response.chunk_overlap.to_string()),
        colors::number(&format_duration(response.duration_secs))
    );

    let mut previous = None;
    for chunk in &response.chunks {
        if previous.is_some_and(|p: usize| chunk.index > p + 1) {
            println!("{}", colors::dim("..."));
        }
        println!(
            "{}",
            colors::label(&format!("Chunk {} ({} chars):", chunk.index + 1, chunk.chars))
        );
        println!("{}", chunk.text);
        println!("{}", colors::dim(CHUNK_SEPARATOR));
        previous = Some(chunk.index);
    }
}

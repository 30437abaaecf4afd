//! docsplit CLI - load documents and split them into chunks
//!
//! # Examples
//!
//! ```bash
//! # Load every .txt and .pdf file under a directory
//! docsplit load ./docs
//!
//! # Split a file into 500-character chunks sharing 50 characters
//! docsplit split report.pdf --chunk-size 500 --chunk-overlap 50
//!
//! # Machine-readable output
//! docsplit --format json split ./docs --all
//!
//! # Show configuration
//! docsplit show-config
//! ```

use clap::Parser;
use docsplit::cli::output::print_error;
use docsplit::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docsplit=warn".into());

    // stdout carries command output; logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("DOCSPLIT_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

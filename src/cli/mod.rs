//! Command-line interface for picscan.
//!
//! Each subcommand is implemented as a separate module with its own argument
//! struct and execution logic:
//!
//! - `panoramas` - scan a tree and print files whose aspect ratio exceeds a
//!   threshold
//! - `histogram` - scan a tree and chart focal-length usage as a text bar
//!   chart
//!
//! # Global Options
//!
//! All commands support these global options:
//! - `--verbose` - enable debug output
//! - `--quiet` - suppress all output except errors and results
//! - `--no-progress` - disable animated progress indicators
//!
//! # Example
//!
//! ```bash
//! picscan panoramas ~/Pictures --threshold 3.0
//! picscan histogram ~/Pictures --ext jpg --ext ARW --no-progress
//! ```

pub mod common;
mod histogram;
mod panoramas;


use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure for picscan.
///
/// Uses the `clap` derive API for parsing, help text, and validation. The
/// global flags are available to both subcommands.
#[derive(Parser)]
#[command(
    name = "picscan",
    about = "Photo library metadata scanner - find panoramas and chart focal lengths",
    version,
    author,
    long_about = "picscan walks a folder of image files, extracts metadata per file with the \
                  external exiftool utility, and aggregates simple statistics: a panoramic \
                  aspect-ratio filter and a focal-length usage histogram."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Shows per-file extraction details and exiftool invocations.
    /// Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress diagnostics; only results and errors are printed.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable animated progress indicators.
    ///
    /// Automatically enabled in non-TTY environments (pipes, redirects, CI),
    /// where plain periodic counter lines are printed instead.
    #[arg(long, global = true)]
    no_progress: bool,
}

/// Available subcommands for the picscan CLI.
#[derive(Subcommand)]
enum Commands {
    /// Find panoramic images by aspect ratio.
    ///
    /// Prints one line per file whose width/height ratio exceeds the
    /// threshold, in traversal order.
    ///
    /// See [`panoramas::PanoramasCommand`] for detailed options.
    Panoramas(panoramas::PanoramasCommand),

    /// Chart focal-length usage across a photo tree.
    ///
    /// Accumulates a frequency table of integer focal lengths and renders a
    /// proportional text bar chart when the scan completes.
    ///
    /// See [`histogram::HistogramCommand`] for detailed options.
    Histogram(histogram::HistogramCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging according to the verbosity flags, then dispatches
    /// to the subcommand. Errors propagate to `main` for user-friendly
    /// display.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        let no_progress = self.no_progress;
        match self.command {
            Commands::Panoramas(cmd) => cmd.execute().await,
            Commands::Histogram(cmd) => cmd.execute(no_progress).await,
        }
    }

    /// Set up the tracing subscriber on stderr.
    ///
    /// Results go to stdout; diagnostics must never mix into them, so the
    /// subscriber always writes to stderr. `RUST_LOG` wins when set and
    /// neither verbosity flag is given.
    fn init_logging(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("info")
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init();
    }
}

//! Progress feedback for long scans.
//!
//! A full photo-library scan runs one subprocess per file and can take
//! minutes, so the histogram pipeline reports how many files it has
//! processed. In an interactive terminal this is a live indicatif counter;
//! in plain mode (non-TTY, `--no-progress`, or the `PICSCAN_NO_PROGRESS`
//! environment variable) it degrades to a plain text line every
//! [`PROGRESS_INTERVAL`] files:
//!
//! ```text
//! 50 images processed...
//! 100 images processed...
//! ```
//!
//! Plain mode keeps output clean for pipes, scripts, and CI logs.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::io::IsTerminal;
use std::time::Duration;

use crate::constants::PROGRESS_INTERVAL;

/// Checks if animated progress should be disabled.
///
/// Animations are disabled when `PICSCAN_NO_PROGRESS` is set or stdout is
/// not a terminal (pipes, redirects, CI systems).
fn is_progress_disabled() -> bool {
    std::env::var("PICSCAN_NO_PROGRESS").is_ok() || !std::io::stdout().is_terminal()
}

/// Per-file progress counter for a scan.
///
/// Call [`record_file`](Self::record_file) once per processed file and
/// [`finish`](Self::finish) when the scan completes so the spinner does not
/// linger over the final report.
pub struct ScanProgress {
    bar: Option<IndicatifBar>,
    processed: u64,
}

impl ScanProgress {
    /// Creates a progress counter; `no_progress` forces plain mode.
    #[must_use]
    pub fn new(no_progress: bool) -> Self {
        let bar = if no_progress || is_progress_disabled() {
            None
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(
                IndicatifStyle::with_template("{spinner:.green} {pos} images processed")
                    .unwrap_or_else(|_| IndicatifStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            Some(bar)
        };

        Self {
            bar,
            processed: 0,
        }
    }

    /// Records one processed file.
    pub fn record_file(&mut self) {
        self.processed += 1;
        match &self.bar {
            Some(bar) => bar.set_position(self.processed),
            None => {
                if self.processed % PROGRESS_INTERVAL == 0 {
                    println!("{} images processed...", self.processed);
                }
            }
        }
    }

    /// Total files recorded so far.
    #[must_use]
    pub const fn processed(&self) -> u64 {
        self.processed
    }

    /// Clears the spinner, leaving the console ready for the final report.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

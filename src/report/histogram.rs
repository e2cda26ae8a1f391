//! Focal-length frequency table and its text bar chart.
//!
//! Rendered output looks like:
//!
//! ```text
//!    2 (   1):  #
//!   18 ( 188):  ############################################################
//!   19 (  15):  #####
//!   20 ( 105):  ##################################
//! ```
//!
//! Rows are sorted by ascending focal length. The bucket with the highest
//! count gets a full-width bar; every other bar is scaled proportionally
//! with a one-character minimum so that non-zero buckets stay visible.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::constants::HISTOGRAM_BAR_WIDTH;

/// Frequency table keyed by integer focal length in millimeters.
///
/// Built incrementally during a scan and consumed once at the end to render
/// the chart. Every key maps to a count of at least 1: absence of a focal
/// length never records anything.
#[derive(Debug, Default)]
pub struct FocalHistogram {
    counts: BTreeMap<u32, u64>,
}

impl FocalHistogram {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `focal_length`.
    pub fn record(&mut self, focal_length: u32) {
        *self.counts.entry(focal_length).or_insert(0) += 1;
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct focal-length buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Count recorded for `focal_length`, zero when absent.
    #[must_use]
    pub fn count(&self, focal_length: u32) -> u64 {
        self.counts.get(&focal_length).copied().unwrap_or(0)
    }

    /// Renders the chart, one row per bucket in ascending focal-length
    /// order. Empty histograms render as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(max_count) = self.counts.values().copied().max() else {
            return String::new();
        };

        let mut out = String::new();
        for (&focal, &count) in &self.counts {
            let bar = "#".repeat(bar_length(count, max_count));
            let _ = writeln!(out, "{focal:>4} ({count:>4}):  {bar}");
        }
        out
    }
}

/// Proportional bar length: `max(1, round(60 * count / max_count))`.
fn bar_length(count: u64, max_count: u64) -> usize {
    let scaled = (HISTOGRAM_BAR_WIDTH as f64 * count as f64 / max_count as f64).round() as usize;
    scaled.max(1)
}

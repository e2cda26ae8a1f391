//! Global constants used throughout the picscan codebase.
//!
//! Defining these centrally keeps magic numbers discoverable. All of them are
//! defaults only: the CLI threads explicit values into the walker and the
//! extractor, so tests can inject their own paths and thresholds.

/// Default file-extension allow-list for image discovery.
///
/// Matching is case-sensitive and extensions are not normalized, so both
/// `jpg` and `JPG` are listed explicitly. `ARW` covers Sony RAW files.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "JPG", "jpeg", "ARW"];

/// Default aspect-ratio threshold above which an image counts as panoramic.
pub const DEFAULT_RATIO_THRESHOLD: f64 = 3.0;

/// Name of the external metadata tool, looked up on `PATH` when no explicit
/// `--exiftool` path is given.
pub const EXIFTOOL_BIN: &str = "exiftool";

/// How many processed files between plain-text progress lines.
///
/// Only used when animated progress is disabled; interactive runs get a live
/// indicatif counter instead.
pub const PROGRESS_INTERVAL: u64 = 50;

/// Width in characters of the longest histogram bar.
///
/// The bucket with the highest count renders at exactly this width; every
/// other bucket is scaled proportionally, with a 1-character minimum so that
/// non-zero buckets never disappear.
pub const HISTOGRAM_BAR_WIDTH: u64 = 60;

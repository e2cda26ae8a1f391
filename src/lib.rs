//! picscan - photo library metadata scanner
//!
//! A command-line tool that recursively scans a folder of image files, invokes
//! the external `exiftool` utility on each one, and aggregates simple
//! statistics from its text output. Two pipelines are provided:
//!
//! - **Panorama detection**: computes the width/height aspect ratio per image
//!   and prints every file whose ratio exceeds a threshold.
//! - **Focal-length histogram**: counts how often each (integer) focal length
//!   was used across the tree and renders a proportional text bar chart.
//!
//! Both pipelines share the same three-stage shape:
//!
//! 1. [`scanner`] walks the tree and filters files by a case-sensitive
//!    extension allow-list.
//! 2. [`exiftool`] runs the external tool once per file and captures its
//!    output as a sequence of ASCII text lines. The subprocess call sits
//!    behind the [`exiftool::MetadataSource`] trait so tests can substitute a
//!    fake without launching a real binary.
//! 3. [`metadata`] scans the captured lines for labeled fields
//!    (`Image Width`, `Image Height`, `Focal Length`); [`report`] renders the
//!    aggregated results.
//!
//! Processing is fully sequential: one subprocess at a time, drained to
//! completion before the next file is visited.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Find panoramic shots (aspect ratio > 3.0) under ~/Pictures
//! picscan panoramas ~/Pictures
//!
//! # Use a custom threshold and tool location
//! picscan panoramas ~/Pictures --threshold 2.5 --exiftool /opt/bin/exiftool
//!
//! # Chart focal-length usage for RAW files only
//! picscan histogram ~/Pictures --ext ARW
//! ```

// Core functionality modules
pub mod cli;
pub mod constants;
pub mod core;

// External tool integration
pub mod exiftool;

// Scanning and aggregation
pub mod metadata;
pub mod report;
pub mod scanner;

// Supporting modules
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

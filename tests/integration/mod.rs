//! Integration test suite for picscan
//!
//! End-to-end tests that drive the compiled binary through `assert_cmd`. A
//! generated shell script stands in for exiftool (see
//! `picscan::test_utils::fake_exiftool`), so no real exiftool installation
//! is required; the subprocess plumbing itself is still exercised for real.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! Tests are organized by subcommand:
//! - **panoramas**: aspect-ratio filtering, extension allow-list, errors
//! - **histogram**: focal-length chart rendering, progress lines, bad input

mod histogram;
mod panoramas;

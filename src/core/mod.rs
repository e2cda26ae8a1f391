//! Core types and error handling for picscan.
//!
//! This module hosts the typed error enum shared across the scanner, the
//! exiftool wrapper, and the CLI, plus the user-facing error presentation
//! used by `main` before exiting.

pub mod error;

pub use error::{ErrorContext, PicscanError, user_friendly_error};

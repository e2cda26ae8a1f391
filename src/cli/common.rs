//! Shared helpers for the CLI commands.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_EXTENSIONS;
use crate::core::PicscanError;
use crate::exiftool::ExiftoolSource;

/// Builds the metadata source for a scan.
///
/// An explicit `--exiftool` path is used as-is; otherwise the tool is looked
/// up on `PATH`. `timeout_secs` bounds each invocation when given.
pub(crate) fn resolve_source(
    explicit: Option<PathBuf>,
    timeout_secs: Option<u64>,
) -> Result<ExiftoolSource, PicscanError> {
    let source = match explicit {
        Some(program) => ExiftoolSource::new(program),
        None => ExiftoolSource::discover()?,
    };
    Ok(source.with_timeout(timeout_secs.map(Duration::from_secs)))
}

/// The extension allow-list for a scan: the `--ext` flags when any were
/// given, the built-in defaults otherwise.
pub(crate) fn effective_extensions(requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
    } else {
        requested.to_vec()
    }
}

//! Metadata extraction through the external exiftool utility.
//!
//! picscan does not parse image files itself; all metadata comes from running
//! `exiftool <file>` as a child process and scanning its label-colon-value
//! text output. That capability is expressed as the [`MetadataSource`] trait
//! (a file path mapped to an ordered sequence of text lines) so the scan
//! pipelines can be driven by a fake source in tests without launching any
//! binary.
//!
//! The real implementation, [`ExiftoolSource`], runs one subprocess per file
//! through [`ExiftoolCommand`], merges stdout and stderr, and decodes the
//! result as ASCII lines. Decoding is per-line and lossy in a controlled way:
//! a non-ASCII line is skipped with a warning while the rest of the output is
//! still scanned. This guard applies to every pipeline that consumes tool
//! output.

pub mod command_builder;


pub use command_builder::{ExiftoolCommand, ExiftoolOutput};

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::EXIFTOOL_BIN;
use crate::core::PicscanError;

/// Capability seam over the external metadata tool.
///
/// Maps a file path to the ordered text lines the tool printed for it. The
/// scan pipelines depend only on this trait, never on a concrete subprocess.
#[allow(async_fn_in_trait)]
pub trait MetadataSource {
    /// Returns the metadata lines for `path`, stripped of surrounding
    /// whitespace, in the order the tool emitted them.
    async fn metadata_lines(&self, path: &Path) -> Result<Vec<String>, PicscanError>;
}

/// [`MetadataSource`] backed by a real exiftool binary.
pub struct ExiftoolSource {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl ExiftoolSource {
    /// Creates a source using an explicit tool path.
    ///
    /// The path is not validated here; a bad path surfaces as a launch
    /// failure on the first file.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Locates exiftool on `PATH`.
    pub fn discover() -> Result<Self, PicscanError> {
        let program = which::which(EXIFTOOL_BIN).map_err(|_| PicscanError::ExiftoolNotFound)?;
        tracing::debug!(target: "exiftool", "Using exiftool at {}", program.display());
        Ok(Self::new(program))
    }

    /// Bounds each invocation to `duration` (None waits indefinitely).
    #[must_use]
    pub const fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    /// The tool path this source invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl MetadataSource for ExiftoolSource {
    async fn metadata_lines(&self, path: &Path) -> Result<Vec<String>, PicscanError> {
        let output = ExiftoolCommand::new(&self.program, path)
            .with_timeout(self.timeout)
            .execute()
            .await?;
        Ok(decode_ascii_lines(output.lines(), path))
    }
}

/// Decodes raw output lines as ASCII, trimming whitespace.
///
/// A line that is not valid ASCII is skipped with a warning diagnostic; the
/// remaining lines are still returned. Skipping is per-line so one bad tag
/// value cannot hide the rest of a file's metadata.
pub(crate) fn decode_ascii_lines<'a>(
    lines: impl Iterator<Item = &'a [u8]>,
    path: &Path,
) -> Vec<String> {
    lines
        .filter_map(|raw| match std::str::from_utf8(raw) {
            Ok(s) if s.is_ascii() => Some(s.trim().to_string()),
            _ => {
                tracing::warn!(
                    target: "exiftool",
                    "Skipping non-ASCII metadata line from {}",
                    path.display()
                );
                None
            }
        })
        .collect()
}

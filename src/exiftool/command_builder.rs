//! Builder for invoking the external exiftool binary
//!
//! This module provides a small builder for constructing and executing
//! exiftool invocations with consistent error handling, logging, and optional
//! timeout management. All metadata extraction goes through this one path so
//! that every call site captures output and classifies failures the same way.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::core::PicscanError;

/// Builder for a single `exiftool <file>` invocation.
///
/// Invocations are fully sequential and blocking from the caller's point of
/// view: [`execute`](Self::execute) resolves only once the child has exited
/// and both output streams are drained.
///
/// # Defaults
///
/// - **Output capture**: both stdout and stderr are always captured; callers
///   consume them as one merged line stream via [`ExiftoolOutput::lines`].
/// - **Timeout**: none. exiftool is a local, CPU-cheap tool; a hang is
///   unexpected enough that waiting indefinitely is the default, with
///   [`with_timeout`](Self::with_timeout) available for callers that want a
///   bound.
///
/// # Examples
///
/// ```rust,ignore
/// use picscan::exiftool::ExiftoolCommand;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let output = ExiftoolCommand::new("exiftool", Path::new("pics/shot.jpg"))
///     .execute()
///     .await?;
/// for line in output.lines() {
///     // label-colon-value byte lines
/// }
/// # Ok(())
/// # }
/// ```
pub struct ExiftoolCommand {
    /// Tool path or name to invoke
    program: PathBuf,

    /// Image file passed as the single positional argument
    file: PathBuf,

    /// Maximum duration to wait for completion (None = no timeout)
    timeout_duration: Option<Duration>,
}

impl ExiftoolCommand {
    /// Creates a command for running `program` against `file`.
    pub fn new(program: impl Into<PathBuf>, file: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            file: file.as_ref().to_path_buf(),
            timeout_duration: None,
        }
    }

    /// Set a custom timeout for the command (None for no timeout)
    #[must_use]
    pub const fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// Execute the command and return its captured output.
    ///
    /// A non-zero exit status is *not* an error here: exiftool exits non-zero
    /// for files it cannot fully parse while still printing usable metadata
    /// lines, so the captured output is returned for scanning either way and
    /// the status is logged at debug. Launch failures and timeouts do fail.
    pub async fn execute(self) -> Result<ExiftoolOutput, PicscanError> {
        let start = std::time::Instant::now();

        tracing::debug!(
            target: "exiftool",
            "Executing command: {} {}",
            self.program.display(),
            self.file.display()
        );

        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.file);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output_future = cmd.output();

        let output = if let Some(duration) = self.timeout_duration {
            match timeout(duration, output_future).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        target: "exiftool",
                        "Command timed out after {}s: {} {}",
                        duration.as_secs(),
                        self.program.display(),
                        self.file.display()
                    );
                    return Err(PicscanError::ExiftoolTimeout {
                        path: self.file.display().to_string(),
                        seconds: duration.as_secs(),
                    });
                }
            }
        } else {
            output_future.await
        };

        let output = output.map_err(|e| PicscanError::ExiftoolLaunchFailed {
            program: self.program.display().to_string(),
            path: self.file.display().to_string(),
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            tracing::debug!(
                target: "exiftool",
                "exiftool exited with {:?} on {}; scanning output anyway",
                output.status.code(),
                self.file.display()
            );
        }

        let elapsed = start.elapsed();
        if elapsed.as_millis() > 500 {
            tracing::debug!(
                target: "exiftool",
                "exiftool took {}ms on {}",
                elapsed.as_millis(),
                self.file.display()
            );
        }

        Ok(ExiftoolOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Captured output from an exiftool invocation.
#[derive(Debug)]
pub struct ExiftoolOutput {
    /// Raw standard output bytes
    pub stdout: Vec<u8>,
    /// Raw standard error bytes
    pub stderr: Vec<u8>,
}

impl ExiftoolOutput {
    /// Both streams as one ordered sequence of raw lines, stdout first.
    ///
    /// exiftool reports per-file warnings on stderr; merging the streams
    /// keeps those lines visible to the same label scan as regular output.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.stdout
            .split(|&b| b == b'\n')
            .chain(self.stderr.split(|&b| b == b'\n'))
            .filter(|line| !line.is_empty())
    }
}

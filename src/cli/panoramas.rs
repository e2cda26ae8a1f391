//! Find panoramic images by aspect ratio.
//!
//! Walks the tree, extracts `Image Width` / `Image Height` per file, and
//! prints every file whose ratio exceeds the threshold:
//!
//! ```text
//! ratio: 3.5  fileName: pics/2020/alps.jpg
//! ratio: 4.0  fileName: pics/2020/coast.jpg
//! ```
//!
//! Files whose dimensions cannot be recovered from the tool output are
//! skipped with a warning; they are never treated as zero-sized.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{effective_extensions, resolve_source};
use crate::constants::DEFAULT_RATIO_THRESHOLD;
use crate::exiftool::MetadataSource;
use crate::metadata::extract_dimensions;
use crate::report::ratio_line;
use crate::scanner::ImageWalker;

/// Command to find panoramic images under a folder.
#[derive(Args)]
pub struct PanoramasCommand {
    /// Root folder to scan recursively
    path: PathBuf,

    /// Minimum aspect ratio (width / height) for a file to be reported
    #[arg(short, long, default_value_t = DEFAULT_RATIO_THRESHOLD)]
    threshold: f64,

    /// Path to the exiftool binary (searched on PATH when omitted)
    #[arg(long, value_name = "PATH")]
    exiftool: Option<PathBuf>,

    /// File extension to include (case-sensitive); repeat for several.
    /// Defaults to jpg, JPG, jpeg, ARW.
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Per-file timeout for the metadata tool, in seconds (no limit when
    /// omitted)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl PanoramasCommand {
    /// Execute the panoramas command.
    pub async fn execute(self) -> Result<()> {
        let source = resolve_source(self.exiftool.clone(), self.timeout)?;
        let matches = self.scan(&source).await?;

        for (path, ratio) in &matches {
            println!("{}", ratio_line(*ratio, path));
        }

        tracing::info!(
            target: "scanner",
            "{} panoramic file(s) above ratio {:.1} under {}",
            matches.len(),
            self.threshold,
            self.path.display()
        );
        Ok(())
    }

    /// Scans the tree and returns `(path, ratio)` for every file above the
    /// threshold, in traversal order.
    ///
    /// Generic over the metadata source so tests can drive it with canned
    /// output instead of a real subprocess.
    pub(crate) async fn scan<S: MetadataSource>(&self, source: &S) -> Result<Vec<(PathBuf, f64)>> {
        let walker = ImageWalker::new(&self.path, effective_extensions(&self.extensions));
        let mut matches = Vec::new();

        for file in walker.images()? {
            let lines = source.metadata_lines(&file).await?;

            let Some(dimensions) = extract_dimensions(&lines) else {
                tracing::warn!(
                    target: "scanner",
                    "No image dimensions found in {}, skipping",
                    file.display()
                );
                continue;
            };

            let ratio = dimensions.aspect_ratio();
            tracing::debug!(
                target: "scanner",
                "{}: {} ratio {:.2}",
                file.display(),
                dimensions,
                ratio
            );

            if ratio > self.threshold {
                matches.push((file, ratio));
            }
        }

        Ok(matches)
    }
}

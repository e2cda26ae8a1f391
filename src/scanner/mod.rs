//! Recursive image discovery.
//!
//! The walker visits every file under a configured root and passes through
//! only those whose extension is on an allow-list. Matching is deliberately
//! case-sensitive and unnormalized (`jpg` and `JPG` are separate entries),
//! mirroring how photo trees mix camera and editor naming conventions.
//!
//! Traversal is depth-first with entries sorted by file name, so output order
//! is deterministic for a given tree. Symlinks are not followed, and any
//! traversal error (an unreadable directory, a vanished file) is fatal and
//! propagates to the caller.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::DEFAULT_EXTENSIONS;
use crate::core::PicscanError;

/// Walks a directory tree and yields image files matching an extension
/// allow-list.
///
/// The root and the allow-list are explicit constructor arguments rather
/// than process-wide constants, so tests can point a walker at a temporary
/// tree with whatever extensions they need.
pub struct ImageWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ImageWalker {
    /// Creates a walker over `root` with an explicit extension allow-list.
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions,
        }
    }

    /// Creates a walker with the default allow-list
    /// (see [`DEFAULT_EXTENSIONS`]).
    pub fn with_default_extensions(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect())
    }

    /// All matching files under the root, in traversal order.
    ///
    /// Returns an error as soon as any directory cannot be read; partial
    /// results are never returned.
    pub fn images(&self) -> Result<Vec<PathBuf>, PicscanError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| PicscanError::WalkFailed {
                path: self.root.display().to_string(),
                reason: e.to_string(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.into_path();
            if self.is_allowed(&path) {
                tracing::trace!(target: "scanner", "Matched {}", path.display());
                files.push(path);
            }
        }

        tracing::debug!(
            target: "scanner",
            "Found {} image files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    fn is_allowed(&self, path: &Path) -> bool {
        file_extension(path).is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// The substring after the last `.` of the file name, or `None` when the
/// name contains no dot. Case is preserved.
pub fn file_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    Some(&name[dot + 1..])
}

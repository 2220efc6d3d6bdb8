//! Depth-bounded corpus traversal.
//!
//! Walks the test tree in pre-order, root included, and classifies every
//! entry it visits: directories are reported and descended into while depth
//! budget remains, regular files are handed to the caller, and anything else
//! (symlink, device node) is reported and skipped. The walk never follows
//! symlinks, so a symlinked directory classifies as "other" and cannot form
//! a traversal loop. No sibling ordering is guaranteed beyond what the
//! underlying directory listing returns.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::common::HarnessError;

/// Depth-capped directory walker.
#[derive(Debug, Clone, Copy)]
pub struct Walker {
    max_depth: usize,
}

impl Walker {
    /// Creates a walker that visits entries at most `max_depth` levels below
    /// the root (the root itself is depth 0).
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Walks the tree under `root`, invoking `on_file` for every regular file.
    ///
    /// Directory and unknown-type entries are reported to stdout with a
    /// two-spaces-per-level indent, mirroring the depth of the entry.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Walk` when a directory cannot be read, and
    /// propagates any error from `on_file` unchanged.
    pub fn walk<F>(&self, root: &Path, mut on_file: F) -> Result<(), HarnessError>
    where
        F: FnMut(&Path) -> Result<(), HarnessError>,
    {
        for entry in WalkDir::new(root).max_depth(self.max_depth) {
            let entry = entry?;
            let depth = entry.depth();
            let indent = "  ".repeat(depth);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                println!("{}{} dir {}", indent, depth, entry.path().display());
            } else if file_type.is_file() {
                on_file(entry.path())?;
            } else {
                debug!(path = %entry.path().display(), "skipping non-regular file");
                println!(
                    "{}{} Unknown file type: {}",
                    indent,
                    depth,
                    entry.file_name().to_string_lossy()
                );
            }
        }
        Ok(())
    }
}

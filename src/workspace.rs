//! Temporary clone destination with guaranteed removal.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

/// The directory a repository is cloned into for the span of one collection
/// run. Removal happens when the guard drops, on success and failure alike.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace directory labelled after the repository.
    pub fn for_repo(name: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("repo-bundle-{name}-"))
            .tempdir()?;
        debug!(path = %dir.path().display(), "Created workspace");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Whether the clone left anything behind in the workspace.
    pub fn is_populated(&self) -> io::Result<bool> {
        Ok(fs::read_dir(self.path())?.next().is_some())
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        debug!(path = %self.dir.path().display(), "Removing workspace");
    }
}

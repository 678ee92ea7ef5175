//! Recursive tree walk that concatenates accepted files into one stream.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, error, info};

use crate::filter::FilterConfig;

/// Width of the `=` rows around each file-path banner.
const BANNER_WIDTH: usize = 80;

#[derive(Debug)]
pub enum CollectError {
    Io(std::io::Error),
}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// Counters for one collection run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectStats {
    pub files_included: usize,
    pub files_skipped: usize,
    pub read_failures: usize,
}

/// Walks a cloned tree and appends every accepted file to an output stream,
/// each preceded by a banner carrying its path relative to the root.
pub struct Collector {
    filter: FilterConfig,
}

impl Collector {
    pub fn new(filter: FilterConfig) -> Self {
        Self { filter }
    }

    /// Collect all accepted files under `root` into `out`.
    ///
    /// Files are emitted in directory enumeration order; no lexicographic
    /// ordering is imposed. A file that cannot be read or written is
    /// reported and skipped, and the walk continues.
    pub fn collect_tree(
        &self,
        root: &Path,
        out: &mut dyn Write,
    ) -> Result<CollectStats, CollectError> {
        info!(path = %root.display(), "Collecting files");
        let mut stats = CollectStats::default();
        self.visit_dir(root, root, out, &mut stats)?;
        info!(
            included = stats.files_included,
            skipped = stats.files_skipped,
            failures = stats.read_failures,
            "Collection complete"
        );
        Ok(stats)
    }

    fn visit_dir(
        &self,
        dir: &Path,
        root: &Path,
        out: &mut dyn Write,
        stats: &mut CollectStats,
    ) -> Result<(), CollectError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if self.filter.excludes_dir(name) {
                    debug!(path = %path.display(), "Skipping directory");
                    continue;
                }
                self.visit_dir(&path, root, out, stats)?;
            } else if path.is_file() {
                if !self.filter.should_include(&path, root) {
                    stats.files_skipped += 1;
                    continue;
                }
                let rel = path.strip_prefix(root).unwrap_or(&path);
                match append_file(&path, rel, out) {
                    Ok(()) => {
                        debug!(path = %rel.display(), "Collected file");
                        stats.files_included += 1;
                    }
                    Err(e) => {
                        error!(error = ?e, path = %path.display(), "Failed to collect file, skipping");
                        stats.read_failures += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

/// One banner plus the file's content, decoded as UTF-8 with undecodable
/// bytes rendered as replacement characters.
fn append_file(path: &Path, rel: &Path, out: &mut dyn Write) -> std::io::Result<()> {
    let raw = fs::read(path)?;
    let text = String::from_utf8_lossy(&raw);
    let rule = "=".repeat(BANNER_WIDTH);
    write!(out, "\n\n{rule}\n")?;
    writeln!(out, "File path: {}", rel.display())?;
    write!(out, "{rule}\n\n")?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

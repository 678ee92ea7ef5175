//! Per-file inclusion rules for the tree collector.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Directory names never descended into or included: version-control
/// metadata plus common dependency/build output directories.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "venv",
    "env",
    "dist",
    "build",
    "target",
];

/// Extensions treated as binary, archive or office payloads.
pub const EXCLUDED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "zip", "tar", "gz", "7z", "rar", "exe", "dll",
    "so", "dylib", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
];

/// Per-file size ceiling in bytes (1 MiB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Inclusion rules, carried explicitly so tests can inject their own lists.
/// `Default` is the fixed rule set above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub excluded_dirs: Vec<String>,
    pub excluded_extensions: Vec<String>,
    pub max_file_size: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_extensions: EXCLUDED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl FilterConfig {
    /// Whether a directory with this name is pruned from the walk.
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Decide inclusion for one file, relative to the workspace root.
    ///
    /// Checks short-circuit to exclusion in order: path segment, extension
    /// (case-insensitive), then size. A file whose metadata cannot be read
    /// is excluded.
    pub fn should_include(&self, path: &Path, root: &Path) -> bool {
        let rel = path.strip_prefix(root).unwrap_or(path);

        for comp in rel.components() {
            let segment = comp.as_os_str().to_string_lossy();
            if self.excluded_dirs.iter().any(|d| segment == d.as_str()) {
                debug!(path = %rel.display(), segment = %segment, "Excluded by path segment");
                return false;
            }
        }

        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            let ext = ext.to_ascii_lowercase();
            if self.excluded_extensions.iter().any(|e| *e == ext) {
                debug!(path = %rel.display(), extension = %ext, "Excluded by extension");
                return false;
            }
        }

        match fs::metadata(path) {
            Ok(meta) if meta.len() > self.max_file_size => {
                debug!(path = %rel.display(), size = meta.len(), "Excluded by size ceiling");
                false
            }
            Ok(_) => true,
            Err(e) => {
                debug!(path = %rel.display(), error = ?e, "Excluded: metadata unreadable");
                false
            }
        }
    }
}

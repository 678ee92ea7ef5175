//! Coordinating module for the validate-clone-collect pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::{error, info};

use crate::collect::Collector;
use crate::fetch::{CloneError, Fetcher};
use crate::filter::FilterConfig;
use crate::github;
use crate::workspace::Workspace;

/// The top-level collection configuration.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub repo_url: String,
    pub output_file: PathBuf,
    pub filter: FilterConfig,
}

/// Summary of one completed collection run.
#[derive(Debug)]
pub struct BundleReport {
    pub repo_url: String,
    pub output_file: PathBuf,
    pub files_included: usize,
    pub files_skipped: usize,
    pub read_failures: usize,
}

/// Entrypoint: clone the repository and bundle its text files per config.
///
/// The workspace exists only for the span of this call; the guard removes it
/// on every path out, including early failure returns. The output file is
/// created only after a successful clone, so a failed run never leaves one
/// behind.
pub async fn bundle<F: Fetcher>(config: &BundleConfig, fetcher: &F) -> Result<BundleReport, String> {
    let url = config.repo_url.trim();

    if !github::is_valid_github_url(url) {
        error!(repo_url = url, "Invalid GitHub repository URL");
        return Err(format!("Invalid GitHub repository URL: {url}"));
    }
    let normalized = github::normalize_github_url(url);
    let name = github::repo_name(&normalized);

    let workspace = Workspace::for_repo(&name).map_err(|e| {
        error!(error = ?e, "Failed to create workspace");
        format!("Failed to create temporary workspace: {e}")
    })?;

    info!(
        repo_url = %normalized,
        path = %workspace.path().display(),
        "Starting collection run"
    );

    if let Err(e) = fetcher.fetch(&normalized, workspace.path()).await {
        return Err(match e {
            CloneError::GitNotInstalled => {
                "Git is not installed or not on the PATH; install git before collecting"
                    .to_string()
            }
            CloneError::CloneFailed(stderr) => format!("Clone failed: {stderr}"),
            CloneError::Launch(err) => format!("Failed to launch git: {err}"),
        });
    }

    match workspace.is_populated() {
        Ok(true) => {}
        Ok(false) => {
            error!(path = %workspace.path().display(), "Workspace empty after clone");
            return Err("Repository clone failed: workspace is empty".to_string());
        }
        Err(e) => {
            error!(error = ?e, "Failed to inspect workspace after clone");
            return Err(format!("Failed to inspect workspace after clone: {e}"));
        }
    }

    let out = File::create(&config.output_file).map_err(|e| {
        error!(
            error = ?e,
            path = %config.output_file.display(),
            "Failed to create output file"
        );
        format!(
            "Failed to create output file {}: {e}",
            config.output_file.display()
        )
    })?;
    let mut out = BufWriter::new(out);

    let stats = Collector::new(config.filter.clone())
        .collect_tree(workspace.path(), &mut out)
        .map_err(|e| format!("Collection failed: {e:?}"))?;

    out.flush()
        .map_err(|e| format!("Failed to flush output file: {e}"))?;

    info!(
        repo_url = %normalized,
        output = %config.output_file.display(),
        included = stats.files_included,
        "Collection run complete"
    );

    Ok(BundleReport {
        repo_url: normalized,
        output_file: config.output_file.clone(),
        files_included: stats.files_included,
        files_skipped: stats.files_skipped,
        read_failures: stats.read_failures,
    })
}

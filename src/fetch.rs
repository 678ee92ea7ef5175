//! Availability probing and cloning via the system git client.

use std::path::Path;
use std::process::Command;

use async_trait::async_trait;
use tracing::{error, info};

/// Errors from probing for git or running the clone subprocess.
#[derive(Debug)]
pub enum CloneError {
    /// No usable `git` binary answers a version query.
    GitNotInstalled,
    /// `git clone` exited non-zero; carries the captured stderr text.
    CloneFailed(String),
    /// The subprocess could not be launched at all.
    Launch(std::io::Error),
}

impl From<std::io::Error> for CloneError {
    fn from(e: std::io::Error) -> Self {
        CloneError::Launch(e)
    }
}

/// Whether a git client is reachable on the search path.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Trait for cloning a repository into a destination directory.
/// Allows plugging in real, test, or mockable fetchers.
#[cfg_attr(any(test, feature = "test-export-mocks"), mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Clone `url` into `dest`, which must already exist and be empty.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), CloneError>;
}

/// Fetcher backed by the system git client.
pub struct GitFetcher;

#[async_trait]
impl Fetcher for GitFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), CloneError> {
        // Probe before touching the network so a missing client is reported
        // as its own condition, not as a clone failure.
        if !git_available() {
            error!("No git client found on the search path");
            return Err(CloneError::GitNotInstalled);
        }

        info!(repo_url = url, path = %dest.display(), "Cloning repository");
        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(dest)
            .output()?;

        if output.status.success() {
            info!(
                repo_url = url,
                path = %dest.display(),
                status = ?output.status,
                "Successfully cloned repository"
            );
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            error!(
                repo_url = url,
                path = %dest.display(),
                stderr = %stderr,
                "Git exited with non-zero code: {}",
                output.status
            );
            Err(CloneError::CloneFailed(stderr))
        }
    }
}

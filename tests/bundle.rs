use std::fs::write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use repo_bundle::bundle::{bundle, BundleConfig};
use repo_bundle::fetch::{CloneError, MockFetcher};
use repo_bundle::filter::FilterConfig;
use tempfile::tempdir;

fn config_for(url: &str, output_file: PathBuf) -> BundleConfig {
    BundleConfig {
        repo_url: url.to_string(),
        output_file,
        filter: FilterConfig::default(),
    }
}

#[tokio::test]
async fn happy_path_bundles_accepted_files_and_removes_the_workspace() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    let workspace_path: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
    let seen = workspace_path.clone();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_fetch().returning(move |_url, dest| {
        *seen.lock().unwrap() = Some(dest.to_path_buf());
        write(dest.join("readme.md"), "hello docs").unwrap();
        write(dest.join("photo.png"), vec![0u8; 64]).unwrap();
        Ok(())
    });

    let config = config_for("https://github.com/example/repo", output_file.clone());
    let report = bundle(&config, &fetcher).await.expect("bundle should succeed");

    // The URL was normalized before the clone.
    assert_eq!(report.repo_url, "https://github.com/example/repo.git");
    assert_eq!(report.files_included, 1);
    assert_eq!(report.files_skipped, 1);

    let output = std::fs::read_to_string(&output_file).unwrap();
    assert!(output.contains("File path: readme.md"));
    assert!(output.contains("hello docs"));
    assert!(!output.contains("photo.png"));

    // Cleanup invariant: the clone destination is gone after the run.
    let path = workspace_path.lock().unwrap().clone().unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn invalid_url_fails_before_any_clone_attempt() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    // No expectation set: a fetch call would panic the mock.
    let fetcher = MockFetcher::new();

    let config = config_for("not-a-repository", output_file.clone());
    let err = bundle(&config, &fetcher).await.unwrap_err();

    assert!(err.contains("Invalid GitHub repository URL"), "got: {err}");
    assert!(!output_file.exists());
}

#[tokio::test]
async fn clone_failure_reports_stderr_and_creates_no_output() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    let workspace_path: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
    let seen = workspace_path.clone();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_fetch().returning(move |_url, dest| {
        *seen.lock().unwrap() = Some(dest.to_path_buf());
        Err(CloneError::CloneFailed(
            "fatal: repository 'https://github.com/example/repo.git' not found".to_string(),
        ))
    });

    let config = config_for("https://github.com/example/repo.git", output_file.clone());
    let err = bundle(&config, &fetcher).await.unwrap_err();

    assert!(err.contains("Clone failed"), "got: {err}");
    assert!(err.contains("not found"), "got: {err}");
    assert!(!output_file.exists());

    // The workspace was created for the attempt and removed on failure too.
    let path = workspace_path.lock().unwrap().clone().unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn missing_git_client_is_its_own_diagnostic() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .returning(|_url, _dest| Err(CloneError::GitNotInstalled));

    let config = config_for("https://github.com/example/repo.git", output_file.clone());
    let err = bundle(&config, &fetcher).await.unwrap_err();

    assert!(err.contains("not installed"), "got: {err}");
    assert!(!output_file.exists());
}

#[tokio::test]
async fn empty_workspace_after_clone_is_an_error() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    // Fetch reports success but leaves nothing behind.
    let mut fetcher = MockFetcher::new();
    fetcher.expect_fetch().returning(|_url, _dest| Ok(()));

    let config = config_for("https://github.com/example/repo.git", output_file.clone());
    let err = bundle(&config, &fetcher).await.unwrap_err();

    assert!(err.contains("empty"), "got: {err}");
    assert!(!output_file.exists());
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn help_lists_both_subcommands() {
    let mut cmd = Command::cargo_bin("repo-bundle").expect("Binary exists");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("collect").and(predicate::str::contains("scrape")));
}

#[test]
fn collect_with_invalid_url_fails_fast() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    let mut cmd = Command::cargo_bin("repo-bundle").expect("Binary exists");
    cmd.arg("collect")
        .arg("--url")
        .arg("definitely-not-a-repository")
        .arg("--output")
        .arg(&output_file);

    // Both inputs are provided via flags, so no prompt blocks the run; the
    // validator rejects the URL before any git or network activity.
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid GitHub repository URL"));

    assert!(!output_file.exists());
}

#[test]
fn collect_rejects_non_github_hosts() {
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("bundle.txt");

    let mut cmd = Command::cargo_bin("repo-bundle").expect("Binary exists");
    cmd.arg("collect")
        .arg("--url")
        .arg("https://gitlab.com/example/repo.git")
        .arg("--output")
        .arg(&output_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid GitHub repository URL"));
}

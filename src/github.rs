//! Recognition and normalization of GitHub repository URLs.

use regex::Regex;

/// The accepted URL shapes: HTTPS with `.git`, SSH, HTTPS without `.git`.
/// Owner and repository segments are limited to word characters and hyphens.
const URL_PATTERNS: [&str; 3] = [
    r"^https?://github\.com/[\w-]+/[\w-]+\.git$",
    r"^git@github\.com:[\w-]+/[\w-]+\.git$",
    r"^https?://github\.com/[\w-]+/[\w-]+$",
];

/// Whether `url` matches one of the accepted GitHub repository shapes.
///
/// Matching is anchored and case-sensitive; anything else is invalid.
pub fn is_valid_github_url(url: &str) -> bool {
    URL_PATTERNS
        .iter()
        .any(|pattern| Regex::new(pattern).unwrap().is_match(url))
}

/// Canonical clone form: the URL with a `.git` suffix. Idempotent.
pub fn normalize_github_url(url: &str) -> String {
    if url.ends_with(".git") {
        url.to_string()
    } else {
        format!("{url}.git")
    }
}

/// Filesystem-safe label for a repository, derived from the last URL
/// segment with the `.git` suffix stripped.
pub fn repo_name(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or(url);
    let last = last.rsplit(':').next().unwrap_or(last);
    let stem = last.strip_suffix(".git").unwrap_or(last);
    Regex::new(r"[^A-Za-z0-9_]")
        .unwrap()
        .replace_all(stem, "_")
        .into_owned()
}

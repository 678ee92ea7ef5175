//! repo-bundle: snapshot a GitHub repository into a single text bundle.
//!
//! The `collect` pipeline clones a repository into a temporary workspace,
//! walks the tree, filters out binaries, oversized files and dependency
//! directories, and concatenates everything that survives into one output
//! file with path banners. The `scrape` utility fetches a page and prints
//! the anchor text found inside elements of a given class.

pub mod bundle;
pub mod cli;
pub mod collect;
pub mod fetch;
pub mod filter;
pub mod github;
pub mod scrape;
pub mod workspace;

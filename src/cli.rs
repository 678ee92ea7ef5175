use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::bundle::{bundle, BundleConfig};
use crate::fetch::GitFetcher;
use crate::filter::FilterConfig;
use crate::scrape;

/// Output filename used when the prompt answer is empty.
pub const DEFAULT_OUTPUT: &str = "repo_code.txt";

/// CLI for repo-bundle: snapshot repositories and scrape page links.
#[derive(Parser)]
#[clap(
    name = "repo-bundle",
    version,
    about = "Clone a GitHub repository and bundle its text files into one annotated snapshot"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone a repository and concatenate its text files into one output file
    Collect {
        /// GitHub repository URL; prompted for interactively when omitted
        #[clap(long)]
        url: Option<String>,
        /// Output file path; prompted for interactively when omitted
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Fetch a page and print the anchor text inside elements of a class
    Scrape {
        /// Page to fetch
        #[clap(long, default_value = scrape::DEFAULT_URL)]
        url: String,
        /// Class attribute value to select elements by
        #[clap(long, default_value = scrape::DEFAULT_CLASS)]
        class: String,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Collect { url, output } => {
            let repo_url = match url {
                Some(u) => u,
                None => prompt("GitHub repository URL: ")?,
            };
            let output_file = match output {
                Some(p) => p,
                None => {
                    let answer =
                        prompt(&format!("Output file name (default: {DEFAULT_OUTPUT}): "))?;
                    if answer.is_empty() {
                        PathBuf::from(DEFAULT_OUTPUT)
                    } else {
                        PathBuf::from(answer)
                    }
                }
            };

            let config = BundleConfig {
                repo_url,
                output_file,
                filter: FilterConfig::default(),
            };
            println!("Collection starting...");
            match bundle(&config, &GitFetcher).await {
                Ok(report) => {
                    println!("Collection complete.\nReport:");
                    println!("{:#?}", report);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("[ERROR] Collection failed: {}", e);
                    Err(anyhow::Error::msg(e))
                }
            }
        }
        Commands::Scrape { url, class } => match scrape::scrape_links(&url, &class).await {
            Ok(links) => {
                for link in &links {
                    println!("{link}");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("[ERROR] Scrape failed: {:?}", e);
                Err(anyhow::anyhow!("scrape failed: {e:?}"))
            }
        },
    }
}

/// Print `label` and read one trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

use clap::Parser;
use repo_bundle::cli::{run, Cli};

#[tokio::main]
async fn main() {
    // Initialize tracing for the CLI.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::info!("CLI arguments parsed, invoking run");

    match run(cli).await {
        Ok(_) => {
            tracing::info!("CLI completed successfully");
            std::process::exit(0);
        }
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            std::process::exit(1);
        }
    }
}

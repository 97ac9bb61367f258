//! Binary entry point. Wires up logging, parses flags, runs the session.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trophos::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing - TROPHOS_LOG_FORMAT=json enables machine-parseable
    // output. Logs go to stderr so they never interleave with the session
    // transcript on stdout.
    let log_format = std::env::var("TROPHOS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trophos=warn".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Run the interactive session
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

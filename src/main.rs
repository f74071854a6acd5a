//! pulp binary entry point
//!
//! # Examples
//!
//! ```bash
//! # Build the index from the configured input directory
//! pulp build-index
//!
//! # Override paths and chunking parameters
//! pulp build-index --input ./pdfs --output ./data/index.json --max-chars 1100 --overlap 120
//!
//! # Show resolved configuration
//! pulp show-config
//! ```

use clap::Parser;
use pulp::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so stdout stays clean for --format json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

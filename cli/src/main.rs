//! Growable demo - append, insert and remove strings, then print them.

use clap::Parser;
use growable_cli::{cli::Cli, commands, common};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::demo::run(&cli) {
        common::error::render_and_exit(e, cli.no_color);
    }
}

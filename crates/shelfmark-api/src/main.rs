//! Main entry point for the Shelfmark API service

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use shelfmark_api::{config::Config, server::Server, Result};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "shelfmark-api", about = "Shelfmark API service", version, author)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate example configuration file
    #[arg(long)]
    gen_config: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging using the unified system
    let log_filter = format!("{}=info", env!("CARGO_BIN_NAME").replace("-", "_"));
    shelfmark_common::logging::init_logging(&args.verbosity, &log_filter)?;

    info!("Starting Shelfmark API v{}", shelfmark_api::VERSION);

    // Handle config generation
    if args.gen_config {
        let example_config = Config::generate_example()?;
        println!("{example_config}");
        return Ok(());
    }

    // Load configuration
    let config = Config::load(args.config.as_deref())?;
    info!(
        "Configuration loaded, binding to {}",
        config.server.bind_address
    );

    // Create and run server
    let server = Server::new(config).await?;

    info!("Shelfmark API initialized successfully");

    // Run until shutdown signal
    match server.run().await {
        Ok(()) => {
            info!("Shelfmark API shut down gracefully");
            Ok(())
        }
        Err(e) => {
            error!("Shelfmark API error: {}", e);
            Err(e)
        }
    }
}

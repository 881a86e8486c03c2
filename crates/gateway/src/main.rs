//! Record Directory - HTTP server for the Country and Person directories.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "record-directory")]
#[command(about = "In-memory Country and Person record directory")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind (overrides DIRECTORY_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides DIRECTORY_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.service.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            gateway_lib::run_server(config.with_address(host, port)).await?;
        }
    }

    Ok(())
}

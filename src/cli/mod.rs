//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod mcp;
pub mod query;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Earthquake data tool server
#[derive(Parser)]
#[command(name = "quake-proxy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query recent earthquakes
    Recent(query::RecentArgs),

    /// Query earthquakes around a coordinate
    Around(query::AroundArgs),

    /// Start HTTP server (foreground)
    Serve(serve::ServeArgs),

    /// Run the MCP tool server on stdio
    Mcp(mcp::McpArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show server/upstream status
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recent(args) => query::run_recent(args).await,
        Commands::Around(args) => query::run_around(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Mcp(args) => mcp::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}

/// Initialize logging on stderr
///
/// `RUST_LOG` wins over `default_filter`. Stdout stays free for command output.
pub(crate) fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

//! quake-proxy CLI entry point
//!
//! Earthquake data tool server - CLI, HTTP API and MCP server

use quake_proxy::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

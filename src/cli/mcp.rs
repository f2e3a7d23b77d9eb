//! MCP command handler

use crate::config::Config;
use crate::error::Result;
use crate::mcp::McpServer;
use crate::quake::QuakeClient;
use clap::Args;

/// MCP command arguments
#[derive(Args)]
pub struct McpArgs {
    /// Override the upstream base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Run the MCP server on stdio
pub async fn run(args: McpArgs) -> Result<()> {
    // Stdout carries protocol frames only
    crate::cli::init_logging("info");

    let mut config = Config::load()?;
    if let Some(base_url) = args.base_url {
        config.set("upstream.base_url", &base_url)?;
    }

    let server = McpServer::new(QuakeClient::from_config(&config)?);
    server.run().await
}

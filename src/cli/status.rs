//! Status command handler
//!
//! Shows configuration summary, local server status and upstream reachability.

use crate::config::Config;
use crate::error::Result;
use crate::quake::{EarthquakeSource, QuakeClient, RecentQuery};
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,

    /// Check the upstream API with a one-result recent query
    #[arg(long)]
    pub upstream: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    println!("quake-proxy v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Upstream: {}", config.upstream.base_url);
    println!(
        "API key:  {}",
        if config.api_key().is_ok() { "configured" } else { "NOT CONFIGURED" }
    );
    println!();

    if args.server {
        check_server_status(&config).await;
    }

    if args.upstream {
        check_upstream(&config).await;
    }

    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                        println!("  Version: {}", version);
                    }
                    if let Some(uptime) = status.get("uptime_secs").and_then(|v| v.as_u64()) {
                        println!("  Uptime:  {}s", uptime);
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
    println!();
}

/// Issue one small query against the upstream API
async fn check_upstream(config: &Config) {
    let client = match QuakeClient::from_config(config) {
        Ok(client) => client,
        Err(e) => {
            println!("Upstream: SKIPPED ({})", e);
            return;
        }
    };

    let query = RecentQuery {
        limit: 1,
        ..RecentQuery::default()
    };

    match client.recent(&query).await {
        Ok(_) => println!("Upstream: OK"),
        Err(e) => println!("Upstream: FAILED ({})", e),
    }
}

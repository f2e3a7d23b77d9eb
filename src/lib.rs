//! quake-proxy: Earthquake Data Tool Server
//!
//! A library and CLI that proxies two read queries to a seismic-data REST
//! API, attaching the API key and returning the upstream JSON untouched.
//!
//! ## Features
//!
//! - `recent` query (magnitude floor, lookback window, limit)
//! - `around` query (coordinate, radius, magnitude floor, limit)
//! - HTTP API + MCP (stdio) tool surfaces + CLI
//!
//! ## Quick Start
//!
//! ```no_run
//! use quake_proxy::quake::{ApiKey, EarthquakeSource, QuakeClient, RecentQuery};
//!
//! # async fn demo() -> quake_proxy::Result<()> {
//! let client = QuakeClient::new("https://quakes.example.com", ApiKey::new("secret"))?;
//!
//! let doc = client.recent(&RecentQuery { min_magnitude: 4.5, ..Default::default() }).await?;
//! println!("{}", doc.get());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod mcp;
pub mod quake;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use quake::{AroundQuery, EarthquakeSource, QuakeClient, RecentQuery};

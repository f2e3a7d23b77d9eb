//! MCP (Model Context Protocol) tool server.
//!
//! Lets agent frameworks call `recent` and `around` as tools.
//! Implements JSON-RPC 2.0 over stdio.

pub mod protocol;
mod server;
pub mod tools;

pub use server::McpServer;

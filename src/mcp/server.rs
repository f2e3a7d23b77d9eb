//! MCP server implementation.

use super::protocol::*;
use super::tools::{get_tools, AROUND_TOOL, RECENT_TOOL};
use crate::error::Result;
use crate::quake::{AroundQuery, EarthquakeSource, RecentQuery};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "earthquake-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server exposing the earthquake tools.
pub struct McpServer<S> {
    source: S,
}

impl<S: EarthquakeSource> McpServer<S> {
    /// Create a new MCP server answering from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run over stdio until stdin closes.
    pub async fn run(&self) -> Result<()> {
        info!("earthquake MCP server starting on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve newline-delimited JSON-RPC from `reader`, replying on `writer`.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Value>(line) {
                Ok(message) => self.handle_message(message).await,
                Err(e) => {
                    warn!(error = %e, "failed to parse request");
                    Some(JsonRpcResponse::error(Value::Null, PARSE_ERROR, "Parse error"))
                }
            };

            if let Some(response) = response {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("stdin closed, MCP server stopping");
        Ok(())
    }

    /// Handle one decoded JSON value. Notifications produce no reply.
    ///
    /// A message is a notification when it has no `id` member at all;
    /// `"id": null` is a request and is answered.
    pub async fn handle_message(&self, message: Value) -> Option<JsonRpcResponse> {
        let is_notification = message.get("id").is_none();
        let id = message.get("id").cloned().unwrap_or(Value::Null);

        let request = match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "invalid request object");
                return Some(JsonRpcResponse::error(id, INVALID_REQUEST, "Invalid Request"));
            }
        };

        if is_notification {
            debug!(method = %request.method, "received notification");
            return None;
        }

        Some(self.handle_request(request).await)
    }

    /// Answer a request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, "received request");

        if request.jsonrpc != "2.0" {
            return JsonRpcResponse::error(
                request.id,
                INVALID_REQUEST,
                "Only JSON-RPC 2.0 is supported",
            );
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::from_result(id, &result)
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        JsonRpcResponse::from_result(id, &ToolsListResult { tools: get_tools() })
    }

    async fn handle_tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, INVALID_PARAMS, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        let result = match params.name.as_str() {
            RECENT_TOOL => match parse_arguments::<RecentQuery>(params.arguments) {
                Ok(query) => to_tool_result(self.source.recent(&query).await),
                Err(message) => ToolCallResult::error(message),
            },
            AROUND_TOOL => match parse_arguments::<AroundQuery>(params.arguments) {
                Ok(query) => to_tool_result(self.source.around(&query).await),
                Err(message) => ToolCallResult::error(message),
            },
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::from_result(id, &result)
    }
}

/// Missing arguments mean "all defaults".
fn parse_arguments<T: DeserializeOwned>(arguments: Option<Value>) -> std::result::Result<T, String> {
    let arguments = arguments.unwrap_or_else(|| json!({}));
    serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))
}

fn to_tool_result(result: Result<crate::quake::Document>) -> ToolCallResult {
    match result {
        Ok(doc) => ToolCallResult::text(doc.get().to_string()),
        Err(e) => {
            warn!(error = %e, "tool call failed");
            ToolCallResult::error(e.to_string())
        }
    }
}

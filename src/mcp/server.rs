//! MCP server with stdio transport
//!
//! Implements JSON-RPC 2.0 server that communicates over stdin/stdout.
//! Handles tool, resource and prompt discovery and execution.

use super::prompts::PromptHandler;
use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use super::resources::ResourceHandler;
use super::tools::ToolHandler;
use crate::error::{GastosError, Result};
use crate::storage::LedgerBackend;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

/// Name reported in the initialize handshake
pub const SERVER_NAME: &str = "Gastos MCP Server";

/// MCP server that handles JSON-RPC requests over stdio
pub struct McpServer {
    tool_handler: ToolHandler,
    resource_handler: ResourceHandler,
    prompt_handler: PromptHandler,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(
        tool_handler: ToolHandler,
        resource_handler: ResourceHandler,
        prompt_handler: PromptHandler,
    ) -> Self {
        Self {
            tool_handler,
            resource_handler,
            prompt_handler,
        }
    }

    /// Create a server whose handlers all share one ledger
    pub fn with_ledger(ledger: Arc<dyn LedgerBackend>) -> Self {
        Self::new(
            ToolHandler::new(ledger.clone()),
            ResourceHandler::new(ledger.clone()),
            PromptHandler::new(ledger),
        )
    }

    /// Run the server (blocking, processes stdin/stdout)
    pub async fn run(&self) -> Result<()> {
        info!("MCP server started, listening on stdin...");

        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await?;

        info!("MCP server shutting down");
        Ok(())
    }

    /// Serve newline-delimited requests until EOF
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    debug!("Received EOF, shutting down");
                    break;
                }
                Ok(_) => {
                    let Some(response) = self.handle_line(&line).await else {
                        continue;
                    };

                    let response_json = serde_json::to_string(&response).map_err(|e| {
                        error!("Failed to serialize response: {}", e);
                        GastosError::Serialization(e)
                    })?;

                    debug!("Sending response: {}", response_json);

                    writer.write_all(response_json.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }

    /// Process a single line; `None` for blank lines and notifications
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Received request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(format!("Invalid JSON: {}", e)),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id.clone(),
                JsonRpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }

        Some(self.process_request(request).await)
    }

    async fn process_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => self.handle_resources_list(request),
            "resources/read" => self.handle_resources_read(request),
            "prompts/list" => self.handle_prompts_list(request),
            "prompts/get" => self.handle_prompts_get(request),

            _ => {
                JsonRpcResponse::error(request.id, JsonRpcError::method_not_found(&request.method))
            }
        }
    }

    fn handle_initialize(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling initialize");

        JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                },
                "capabilities": {
                    "tools": {},
                    "resources": {},
                    "prompts": {}
                }
            }),
        )
    }

    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/list");

        JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "tools": self.tool_handler.list_tools()
            }),
        )
    }

    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/call");

        let (tool_name, arguments) = match named_params(&request.params) {
            Ok(parts) => parts,
            Err(e) => return JsonRpcResponse::error(request.id, e),
        };

        match self.tool_handler.execute(&tool_name, arguments).await {
            Ok(result) => {
                let text = match result {
                    Value::String(s) => s,
                    other => serde_json::to_string_pretty(&other)
                        .unwrap_or_else(|_| other.to_string()),
                };
                JsonRpcResponse::success(
                    request.id,
                    serde_json::json!({
                        "content": [
                            {
                                "type": "text",
                                "text": text
                            }
                        ]
                    }),
                )
            }
            Err(e) => JsonRpcResponse::error(request.id, to_rpc_error("Tool execution failed", e)),
        }
    }

    fn handle_resources_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling resources/list");

        JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "resources": self.resource_handler.list_resources()
            }),
        )
    }

    fn handle_resources_read(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling resources/read");

        let uri = match request.params.get("uri").and_then(|v| v.as_str()) {
            Some(uri) => uri,
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::invalid_params("missing 'uri' field"),
                );
            }
        };

        match self.resource_handler.read(uri) {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(e) => {
                JsonRpcResponse::error(request.id, to_rpc_error("Resource read failed", e))
            }
        }
    }

    fn handle_prompts_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling prompts/list");

        JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "prompts": self.prompt_handler.list_prompts()
            }),
        )
    }

    fn handle_prompts_get(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling prompts/get");

        let (name, _arguments) = match named_params(&request.params) {
            Ok(parts) => parts,
            Err(e) => return JsonRpcResponse::error(request.id, e),
        };

        match self.prompt_handler.get(&name) {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(e) => JsonRpcResponse::error(request.id, to_rpc_error("Prompt failed", e)),
        }
    }
}

/// Split `{"name": ..., "arguments": {...}}` params
fn named_params(params: &Value) -> std::result::Result<(String, Value), JsonRpcError> {
    let params = params
        .as_object()
        .ok_or_else(|| JsonRpcError::invalid_params("params must be an object"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params("missing 'name' field"))?;

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    Ok((name.to_string(), arguments))
}

/// Caller mistakes map to invalid params; everything else is an application error
fn to_rpc_error(context: &str, err: GastosError) -> JsonRpcError {
    match err {
        GastosError::InvalidParams(_)
        | GastosError::UnknownTool(_)
        | GastosError::UnknownResource(_)
        | GastosError::UnknownPrompt(_) => JsonRpcError::invalid_params(err.to_string()),
        other => JsonRpcError::application_error(-32000, format!("{}: {}", context, other)),
    }
}

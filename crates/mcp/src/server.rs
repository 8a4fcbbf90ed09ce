// JSON-RPC dispatch over stdio

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// MCP server speaking line-delimited JSON-RPC 2.0 on stdin/stdout.
///
/// Requests are processed one at a time in arrival order. Notifications
/// (requests without an `id`) are consumed without a response, per JSON-RPC.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Read requests from stdin and write responses to stdout until EOF or
    /// cancellation.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!(tools = self.registry.len(), "server ready");

        loop {
            let line = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                info!("stdin closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await {
                let mut payload = serde_json::to_vec(&response)?;
                payload.push(b'\n');
                stdout.write_all(&payload).await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }

    /// Handle one raw message; `None` means nothing is written back.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "unparseable message");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return None;
        }

        Some(self.handle_request(request).await)
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.unwrap_or(Value::Null);
        debug!(method = %request.method, "request");

        match request.method.as_str() {
            "initialize" => match serde_json::to_value(InitializeResult::current()) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => {
                    JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
                }
            },
            "ping" => JsonRpcResponse::success(id, Value::Object(Default::default())),
            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.registry.list_schemas(),
                };
                match serde_json::to_value(result) {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(e) => {
                        JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
                    }
                }
            }
            "tools/call" => self.handle_tool_call(id, request.params).await,
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        }
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(params)) => params,
            Ok(None) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("Missing params for tools/call"),
                )
            }
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}")),
                )
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)),
            );
        };

        debug!(tool = %params.name, "executing tool");
        match tool.execute(params.arguments).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => {
                    JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
                }
            },
            Err(e) => {
                error!(tool = %params.name, error = %e, "tool execution failed");
                JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
            }
        }
    }
}

//! MCP request dispatch.
//!
//! Routes JSON-RPC messages to the tool registry. Tool execution failures
//! become `isError` tool results; only malformed requests and unknown
//! methods surface as JSON-RPC errors. Notifications never get a response.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

use super::protocol::{
    error_codes, CallToolParams, CallToolResult, Content, InitializeResult, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, PROTOCOL_VERSION,
};
use crate::docs::Partition;
use crate::tools::ToolRegistry;

/// One MCP server instance bound to a partition's tool set.
pub struct McpService {
    partition: Partition,
    registry: ToolRegistry,
    initialized: AtomicBool,
}

impl McpService {
    pub fn new(partition: Partition, registry: ToolRegistry) -> Self {
        Self {
            partition,
            registry,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Handles one raw message from the wire. Returns `None` when no
    /// response must be written (notifications, unparseable notifications).
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(e) => {
                warn!("Discarding unparseable message: {e}");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Dispatches a parsed request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        match request.id {
            Some(id) => Some(self.handle_call(id, &request.method, request.params).await),
            None => {
                self.handle_notification(&request.method);
                None
            }
        }
    }

    async fn handle_call(&self, id: Value, method: &str, params: Option<Value>) -> JsonRpcResponse {
        match method {
            "initialize" => self.initialize(id, params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.list_tools(id),
            "tools/call" => self.call_tool(id, params).await,
            other => {
                warn!("Unknown method: {other}");
                JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                )
            }
        }
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => {
                self.initialized.store(true, Ordering::SeqCst);
                info!("Client completed initialization");
            }
            other => debug!("Ignoring notification: {other}"),
        }
    }

    fn initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        if let Some(client_info) = params
            .as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(Value::as_object)
        {
            info!(
                "Initializing for client {} {}",
                client_info.get("name").and_then(Value::as_str).unwrap_or("unknown"),
                client_info.get("version").and_then(Value::as_str).unwrap_or(""),
            );
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION,
            capabilities: ServerCapabilities::default(),
            server_info: ServerInfo {
                name: self.partition.server_name().to_string(),
                version: crate::VERSION.to_string(),
            },
            instructions: Some(self.partition.instructions().to_string()),
        };

        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => internal_error(id, e),
        }
    }

    fn list_tools(&self, id: Value) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.registry.definitions(),
        };

        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => internal_error(id, e),
        }
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams =
            match serde_json::from_value(params.unwrap_or(Value::Null)) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid tool call parameters: {e}"),
                    )
                }
            };

        let Some(tool) = self.registry.get_tool(&params.name) else {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {}", params.name),
            );
        };

        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        debug!("Executing tool {}", params.name);

        let result = match tool.execute(arguments).await {
            Ok(content) => CallToolResult {
                content,
                is_error: false,
            },
            Err(e) => {
                error!("Tool {} failed: {e:#}", params.name);
                CallToolResult {
                    content: vec![Content::text(e.to_string())],
                    is_error: true,
                }
            }
        };

        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => internal_error(id, e),
        }
    }
}

fn internal_error(id: Value, e: serde_json::Error) -> JsonRpcResponse {
    error!("Failed to serialize response: {e}");
    JsonRpcResponse::error(
        id,
        error_codes::INTERNAL_ERROR,
        format!("Internal error: {e}"),
    )
}

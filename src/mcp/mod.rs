//! MCP protocol layer: wire types, dispatch, and the stdio transport.

pub mod protocol;
pub mod service;
pub mod stdio;

pub use protocol::{Content, JsonRpcRequest, JsonRpcResponse, ToolDefinition};
pub use service::McpService;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::mcp::protocol::Content;

/// A tool callable through `tools/call`.
///
/// `execute` returns the content items for a successful call; an `Err` is
/// reported to the client as an `isError` tool result, not a protocol error.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn schema(&self) -> Value;
    async fn execute(&self, arguments: Value) -> Result<Vec<Content>>;
}

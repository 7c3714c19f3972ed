//! The `get_available_services` tool, China partition only.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use super::trait_def::Tool;
use crate::docs::{
    extract_or_sentinel, format_documentation_result, is_html_content, DocsClient,
};
use crate::mcp::protocol::Content;

const SERVICES_URL: &str = "https://docs.amazonaws.cn/en_us/aws/latest/userguide/services.html";

const DESCRIPTION: &str = "\
Fetch available services from AWS China documentation.

## Usage

Available services in AWS China are different from global AWS services. \
This tool retrieves a list of available services and their documentation URLs.

## Output Format

The output is formatted as markdown text with:
- Preserved headings and structure
- Code blocks for examples
- Lists and tables converted to markdown format";

/// Lists the services available in the AWS China partition.
pub struct AvailableServicesTool {
    client: Arc<DocsClient>,
}

impl AvailableServicesTool {
    pub fn new(client: Arc<DocsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AvailableServicesTool {
    fn name(&self) -> &'static str {
        "get_available_services"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _arguments: Value) -> Result<Vec<Content>> {
        let page = match self.client.fetch_page(SERVICES_URL, None).await {
            Ok(page) => page,
            Err(e) => {
                error!("{e}");
                return Ok(vec![Content::text(e.to_string())]);
            }
        };

        let content = if is_html_content(&page.body, &page.content_type) {
            extract_or_sentinel(&page.body)
        } else {
            page.body
        };

        // The services listing is returned whole, without pagination.
        let result = format_documentation_result(SERVICES_URL, &content, 0, usize::MAX);
        Ok(vec![Content::text(result)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_schema_has_no_required_arguments() {
        let tool =
            AvailableServicesTool::new(Arc::new(DocsClient::new(Duration::from_secs(5)).unwrap()));
        let schema = tool.schema();
        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"], json!({}));
    }
}

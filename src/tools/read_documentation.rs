//! The `read_documentation` tool.

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

use super::trait_def::Tool;
use crate::docs::{
    extract_or_sentinel, format_documentation_result, is_html_content, DocsClient, Partition,
    SearchResultCache,
};
use crate::mcp::protocol::Content;

const DEFAULT_MAX_LENGTH: usize = 5000;
const MAX_LENGTH_LIMIT: usize = 1_000_000;

const DESCRIPTION: &str = "\
Fetch and convert an AWS documentation page to markdown format.

## Usage

This tool retrieves the content of an AWS documentation page and converts it to markdown format. \
For long documents, you can make multiple calls with different start_index values to retrieve \
the entire content in chunks.

## URL Requirements

- Must be from the documentation domain for this server's partition
- Must end with .html

## Output Format

The output is formatted as markdown text with:
- Preserved headings and structure
- Code blocks for examples
- Lists and tables converted to markdown format

## Handling Long Documents

If the response indicates the document was truncated, you have several options:

1. **Continue Reading**: Make another call with start_index set to the end of the previous response
2. **Stop Early**: For very long documents (>30,000 characters), if you've already found the specific information needed, you can stop reading";

#[derive(Debug, Deserialize)]
struct ReadDocumentationArgs {
    url: String,

    #[serde(default = "default_max_length")]
    max_length: usize,

    #[serde(default)]
    start_index: usize,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

/// Fetches a documentation page and returns it as paginated markdown.
pub struct ReadDocumentationTool {
    partition: Partition,
    client: Arc<DocsClient>,
    cache: Arc<SearchResultCache>,
}

impl ReadDocumentationTool {
    pub fn new(
        partition: Partition,
        client: Arc<DocsClient>,
        cache: Arc<SearchResultCache>,
    ) -> Self {
        Self {
            partition,
            client,
            cache,
        }
    }
}

#[async_trait]
impl Tool for ReadDocumentationTool {
    fn name(&self) -> &'static str {
        "read_documentation"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "URL of the AWS documentation page to read"
                },
                "max_length": {
                    "type": "integer",
                    "description": "Maximum number of characters to return.",
                    "default": DEFAULT_MAX_LENGTH,
                    "minimum": 1,
                    "maximum": MAX_LENGTH_LIMIT - 1
                },
                "start_index": {
                    "type": "integer",
                    "description": "On return output starting at this character index, useful if a previous fetch was truncated and more content is required.",
                    "default": 0,
                    "minimum": 0
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<Vec<Content>> {
        let args: ReadDocumentationArgs = serde_json::from_value(arguments)
            .map_err(|e| anyhow::anyhow!("Invalid arguments for read_documentation: {e}"))?;

        if args.max_length == 0 || args.max_length >= MAX_LENGTH_LIMIT {
            bail!(
                "max_length must be between 1 and {}",
                MAX_LENGTH_LIMIT - 1
            );
        }

        if let Err(e) = self.partition.validate_url(&args.url) {
            error!("{e}");
            match self.partition {
                // The global server rejects bad URLs outright; the China
                // server reports them in-band as the tool output.
                Partition::Aws => bail!("{e}"),
                Partition::AwsCn => return Ok(vec![Content::text(e.to_string())]),
            }
        }

        let query_id = self.cache.query_id_for(&args.url);

        let page = match self.client.fetch_page(&args.url, query_id.as_deref()).await {
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

        let result =
            format_documentation_result(&args.url, &content, args.start_index, args.max_length);

        let total_chars = content.chars().count();
        let window_end = args.start_index.saturating_add(args.max_length);
        if total_chars > window_end {
            debug!("Content truncated at {window_end} of {total_chars} characters");
        }

        Ok(vec![Content::text(result)])
    }
}

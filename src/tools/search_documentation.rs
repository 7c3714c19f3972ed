//! The `search_documentation` tool.

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

use super::trait_def::Tool;
use crate::docs::{parse_search_results, DocsClient, SearchResult, SearchResultCache};
use crate::mcp::protocol::Content;

const DEFAULT_LIMIT: usize = 10;
const MIN_LIMIT: usize = 1;
const MAX_LIMIT: usize = 50;

const DESCRIPTION: &str = "\
Search AWS documentation using the official AWS Documentation Search API.

## Usage

This tool searches across all AWS documentation for pages matching your search phrase. \
Use it to find relevant documentation when you don't have a specific URL.

## Search Tips

- Use specific technical terms rather than general phrases
- Include service names to narrow results (e.g., \"S3 bucket versioning\" instead of just \"versioning\")
- Use quotes for exact phrase matching (e.g., \"AWS Lambda function URLs\")
- Include abbreviations and alternative terms to improve results

## Result Interpretation

Each result includes:
- rank_order: The relevance ranking (lower is more relevant)
- url: The documentation page URL
- title: The page title
- context: A brief excerpt or summary (if available)";

#[derive(Debug, Deserialize)]
struct SearchDocumentationArgs {
    search_phrase: String,

    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Searches AWS documentation and records results for query-id propagation.
pub struct SearchDocumentationTool {
    client: Arc<DocsClient>,
    cache: Arc<SearchResultCache>,
}

impl SearchDocumentationTool {
    pub fn new(client: Arc<DocsClient>, cache: Arc<SearchResultCache>) -> Self {
        Self { client, cache }
    }
}

#[async_trait]
impl Tool for SearchDocumentationTool {
    fn name(&self) -> &'static str {
        "search_documentation"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "search_phrase": {
                    "type": "string",
                    "description": "Search phrase to use"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results to return",
                    "default": DEFAULT_LIMIT,
                    "minimum": MIN_LIMIT,
                    "maximum": MAX_LIMIT
                }
            },
            "required": ["search_phrase"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<Vec<Content>> {
        let args: SearchDocumentationArgs = serde_json::from_value(arguments)
            .map_err(|e| anyhow::anyhow!("Invalid arguments for search_documentation: {e}"))?;

        if !(MIN_LIMIT..=MAX_LIMIT).contains(&args.limit) {
            bail!("limit must be between {MIN_LIMIT} and {MAX_LIMIT}");
        }

        debug!("Searching AWS documentation for: {}", args.search_phrase);

        let data = match self.client.search(&args.search_phrase).await {
            Ok(data) => data,
            Err(e) => {
                error!("{e}");
                let placeholder = SearchResult {
                    rank_order: 1,
                    url: String::new(),
                    title: e.to_string(),
                    query_id: String::new(),
                    context: None,
                };
                return results_to_content(&[placeholder]);
            }
        };

        let results = parse_search_results(data, args.limit);
        debug!(
            "Found {} search results for: {}",
            results.len(),
            args.search_phrase
        );

        self.cache.record(results.clone());
        results_to_content(&results)
    }
}

fn results_to_content(results: &[SearchResult]) -> Result<Vec<Content>> {
    results
        .iter()
        .map(|result| Ok(Content::text(serde_json::to_string_pretty(result)?)))
        .collect()
}

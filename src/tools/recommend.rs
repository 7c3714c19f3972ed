//! The `recommend` tool.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

use super::trait_def::Tool;
use crate::docs::{parse_recommendation_results, DocsClient, RecommendationResult};
use crate::mcp::protocol::Content;

const DESCRIPTION: &str = "\
Get content recommendations for an AWS documentation page.

## Usage

This tool provides recommendations for related AWS documentation pages based on a given URL. \
Use it to discover additional relevant content that might not appear in search results.

## Recommendation Types

The recommendations include four categories:

1. **Highly Rated**: Popular pages within the same AWS service
2. **New**: Recently added pages within the same AWS service - useful for finding newly released features
3. **Similar**: Pages covering similar topics to the current page
4. **Journey**: Pages commonly viewed next by other users

## Finding New Features

To find newly released information about a service:
1. Find any page belong to that service, typically you can try the welcome page
2. Call this tool with that URL
3. Look specifically at the **New** recommendation type in the results

## Result Interpretation

Each recommendation includes:
- url: The documentation page URL
- title: The page title
- context: A brief description (if available)";

#[derive(Debug, Deserialize)]
struct RecommendArgs {
    url: String,
}

/// Fetches related-content recommendations for a documentation page.
pub struct RecommendTool {
    client: Arc<DocsClient>,
}

impl RecommendTool {
    pub fn new(client: Arc<DocsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for RecommendTool {
    fn name(&self) -> &'static str {
        "recommend"
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
                    "description": "URL of the AWS documentation page to get recommendations for"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<Vec<Content>> {
        let args: RecommendArgs = serde_json::from_value(arguments)
            .map_err(|e| anyhow::anyhow!("Invalid arguments for recommend: {e}"))?;

        debug!("Getting recommendations for: {}", args.url);

        let data = match self.client.recommendations(&args.url).await {
            Ok(data) => data,
            Err(e) => {
                error!("{e}");
                let placeholder = RecommendationResult {
                    url: String::new(),
                    title: e.to_string(),
                    context: None,
                };
                return results_to_content(&[placeholder]);
            }
        };

        let results = parse_recommendation_results(data);
        debug!("Found {} recommendations for: {}", results.len(), args.url);

        results_to_content(&results)
    }
}

fn results_to_content(results: &[RecommendationResult]) -> Result<Vec<Content>> {
    results
        .iter()
        .map(|result| Ok(Content::text(serde_json::to_string_pretty(result)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn tool() -> RecommendTool {
        RecommendTool::new(Arc::new(DocsClient::new(Duration::from_secs(5)).unwrap()))
    }

    #[tokio::test]
    async fn test_missing_url_rejected() {
        let result = tool().execute(json!({})).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid arguments"));
    }

    #[test]
    fn test_schema_requires_url() {
        let schema = tool().schema();
        assert_eq!(schema["required"], json!(["url"]));
    }

    #[test]
    fn test_results_serialize_one_content_per_result() {
        let results = vec![RecommendationResult {
            url: "https://docs.aws.amazon.com/a.html".to_string(),
            title: "A".to_string(),
            context: Some("Similar content".to_string()),
        }];

        let content = results_to_content(&results).unwrap();
        assert_eq!(content.len(), 1);
        let Content::Text { text } = &content[0];
        assert!(text.contains("Similar content"));
    }
}

//! Tool registry.
//!
//! Assembles the tool set for a documentation partition and serves tool
//! definitions to `tools/list`.

use std::sync::Arc;

use super::available_services::AvailableServicesTool;
use super::read_documentation::ReadDocumentationTool;
use super::recommend::RecommendTool;
use super::search_documentation::SearchDocumentationTool;
use super::trait_def::Tool;
use crate::docs::{DocsClient, Partition, SearchResultCache};
use crate::mcp::protocol::ToolDefinition;

/// Registry of the tools exposed by one server instance.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates the tool set for the given partition. Search and
    /// recommendations only exist for the global site; the China site gets
    /// the service-availability listing instead.
    pub fn for_partition(
        partition: Partition,
        client: Arc<DocsClient>,
        cache: Arc<SearchResultCache>,
    ) -> Self {
        let tools: Vec<Arc<dyn Tool>> = match partition {
            Partition::Aws => vec![
                Arc::new(ReadDocumentationTool::new(
                    partition,
                    Arc::clone(&client),
                    Arc::clone(&cache),
                )),
                Arc::new(SearchDocumentationTool::new(
                    Arc::clone(&client),
                    Arc::clone(&cache),
                )),
                Arc::new(RecommendTool::new(client)),
            ],
            Partition::AwsCn => vec![
                Arc::new(ReadDocumentationTool::new(
                    partition,
                    Arc::clone(&client),
                    cache,
                )),
                Arc::new(AvailableServicesTool::new(client)),
            ],
        };

        Self { tools }
    }

    /// Tool definitions for `tools/list`.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.schema(),
            })
            .collect()
    }

    /// Get a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Get all registered tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

//! aws-docs-mcp - MCP server for public AWS documentation
//!
//! This library implements a Model Context Protocol server that gives AI
//! assistants access to AWS documentation: reading pages as markdown with
//! pagination, searching via the documentation search API, and fetching
//! related-content recommendations.
//!
//! # Core Concepts
//!
//! - **Partitions**: the global site (docs.aws.amazon.com) and the China
//!   site (docs.amazonaws.cn) expose different tool sets
//! - **Tools**: MCP tools implemented against the shared documentation
//!   client, assembled per partition by the registry
//! - **Query-id propagation**: results from recent searches are cached so a
//!   follow-up page read can carry the originating search's query id
//!
//! # Project Structure
//!
//! - [`docs`]: documentation access: HTTP client, HTML conversion,
//!   pagination, search/recommendation parsing
//! - [`tools`]: the MCP tools and their registry
//! - [`mcp`]: JSON-RPC/MCP wire types, dispatch, and the stdio transport
//! - [`cli`]: command-line interface
//!
//! # Example Usage
//!
//! ```ignore
//! use aws_docs_mcp::docs::{DocsClient, Partition, SearchResultCache};
//! use aws_docs_mcp::mcp::McpService;
//! use aws_docs_mcp::tools::ToolRegistry;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Arc::new(DocsClient::new(Duration::from_secs(30))?);
//! let cache = Arc::new(SearchResultCache::new());
//! let registry = ToolRegistry::for_partition(Partition::Aws, client, cache);
//! let service = McpService::new(Partition::Aws, registry);
//!
//! aws_docs_mcp::mcp::stdio::run(service).await?;
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod cli;
pub mod config;
pub mod docs;
pub mod mcp;
pub mod tools;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, DocsMcpConfig};
pub use docs::{
    DocsClient, DocsError, Partition, RecommendationResult, SearchResult, SearchResultCache,
};
pub use mcp::{McpService, ToolDefinition};
pub use tools::{Tool, ToolRegistry};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "aws-docs-mcp");
    }
}

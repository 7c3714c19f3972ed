//! Subcommand handlers. Each returns a process exit code.

use tracing::{error, info};

use super::commands::{HealthArgs, ServeArgs};
use crate::config::DocsMcpConfig;
use crate::docs::SearchResultCache;
use crate::mcp::{stdio, McpService};
use crate::tools::ToolRegistry;
use std::sync::Arc;

/// Runs the MCP server on stdio.
pub async fn handle_serve(args: &ServeArgs) -> i32 {
    let mut config = DocsMcpConfig::default();
    if let Some(partition) = args.partition {
        config.partition = partition;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        return 2;
    }

    let client = match config.create_client() {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let cache = Arc::new(SearchResultCache::new());
    let registry = ToolRegistry::for_partition(config.partition, client, cache);
    let service = McpService::new(config.partition, registry);

    info!("Starting AWS Documentation MCP Server");

    match stdio::run(service).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Server error: {e:#}");
            1
        }
    }
}

/// Probes the partition's documentation landing page.
pub async fn handle_health(args: &HealthArgs) -> i32 {
    let mut config = DocsMcpConfig::default();
    if let Some(partition) = args.partition {
        config.partition = partition;
    }

    let client = match config.create_client() {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let url = config.partition.health_url();
    match client.health_check(url).await {
        Ok(true) => {
            println!("{}: healthy ({url})", config.partition);
            0
        }
        Ok(false) => {
            println!("{}: unreachable ({url})", config.partition);
            1
        }
        Err(e) => {
            eprintln!("{}: health check failed: {e}", config.partition);
            1
        }
    }
}

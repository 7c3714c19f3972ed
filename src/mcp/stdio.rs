//! Line-delimited stdio transport.
//!
//! Stdout is the wire: one JSON-RPC message per line, flushed per response.
//! All logging must go to stderr. EOF on stdin shuts the server down.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use super::service::McpService;

/// Runs the server until stdin closes.
pub async fn run(service: McpService) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    info!(
        "AWS Documentation MCP Server ({}) listening on stdio",
        service.partition()
    );

    while let Some(line) = lines.next_line().await.context("reading from stdin")? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if let Some(response) = service.handle_message(message).await {
            let mut payload =
                serde_json::to_vec(&response).context("serializing response")?;
            payload.push(b'\n');
            stdout
                .write_all(&payload)
                .await
                .context("writing to stdout")?;
            stdout.flush().await.context("flushing stdout")?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

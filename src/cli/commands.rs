use clap::{Parser, Subcommand};

use crate::docs::Partition;

/// MCP server for public AWS documentation
#[derive(Parser, Debug)]
#[command(
    name = "aws-docs-mcp",
    about = "MCP server for public AWS documentation",
    version,
    author,
    long_about = "aws-docs-mcp exposes AWS documentation to MCP clients: reading pages as \
                  markdown with pagination, searching via the documentation search API, and \
                  fetching related-content recommendations. The China partition serves the \
                  docs.amazonaws.cn site instead, with a service-availability listing."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity (debug-level logging)"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run the MCP server on stdio",
        long_about = "Runs the MCP server, reading JSON-RPC messages from stdin and writing \
                      responses to stdout. Logs go to stderr.\n\n\
                      Examples:\n  \
                      aws-docs-mcp serve\n  \
                      aws-docs-mcp serve --partition aws-cn\n  \
                      aws-docs-mcp serve --timeout 60"
    )]
    Serve(ServeArgs),

    #[command(
        about = "Check documentation endpoint availability",
        long_about = "Probes the documentation landing page for the selected partition and \
                      reports whether it is reachable.\n\n\
                      Examples:\n  \
                      aws-docs-mcp health\n  \
                      aws-docs-mcp health --partition aws-cn"
    )]
    Health(HealthArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[arg(
        short = 'p',
        long,
        value_parser = parse_partition,
        help = "Documentation partition to serve (aws or aws-cn)"
    )]
    pub partition: Option<Partition>,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Request timeout in seconds for outbound documentation requests"
    )]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct HealthArgs {
    #[arg(
        short = 'p',
        long,
        value_parser = parse_partition,
        help = "Documentation partition to check (aws or aws-cn)"
    )]
    pub partition: Option<Partition>,
}

fn parse_partition(s: &str) -> Result<Partition, String> {
    s.parse()
}

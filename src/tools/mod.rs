//! Tools exposed over MCP.

pub mod available_services;
pub mod read_documentation;
pub mod recommend;
pub mod registry;
pub mod search_documentation;
pub mod trait_def;

pub use registry::ToolRegistry;
pub use trait_def::Tool;

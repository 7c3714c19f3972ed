//! Documentation partitions.
//!
//! AWS publishes its documentation under two independent partitions: the
//! global site at docs.aws.amazon.com and the China site at docs.amazonaws.cn.
//! The partitions differ in more than the domain: search and recommendations
//! only exist for the global site, while the China site carries a dedicated
//! service-availability listing instead. This module owns those per-partition
//! facts so the rest of the crate can stay partition-agnostic.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Instructions surfaced to MCP clients for the global partition.
const AWS_INSTRUCTIONS: &str = "\
# AWS Documentation MCP Server

This server provides tools to access public AWS documentation, search for content, and get recommendations.

## Best Practices

- For long documentation pages, make multiple calls to `read_documentation` with different `start_index` values for pagination
- For very long documents (>30,000 characters), stop reading if you've found the needed information
- When searching, use specific technical terms rather than general phrases
- Use `recommend` tool to discover related content that might not appear in search results
- For recent updates to a service, get an URL for any page in that service, then check the **New** section of the `recommend` tool output on that URL
- If multiple searches with similar terms yield insufficient results, pivot to using `recommend` to find related pages.
- Always cite the documentation URL when providing information to users

## Tool Selection Guide

- Use `search_documentation` when: You need to find documentation about a specific AWS service or feature
- Use `read_documentation` when: You have a specific documentation URL and need its content
- Use `recommend` when: You want to find related content to a documentation page you're already viewing or need to find newly released information
- Use `recommend` as a fallback when: Multiple searches have not yielded the specific information needed
";

/// Instructions surfaced to MCP clients for the China partition.
const AWS_CN_INSTRUCTIONS: &str = "\
# AWS China Documentation MCP Server

This server provides tools to access public AWS China documentation, and get service differences between AWS China and global regions.

## Best Practices

- Always use `get_available_services` first to checkout available services and their documentation URLs
- If a service is available, checkout the documentation URL for that service to see the feature differences and other documentation URLs
- For long documentation pages, make multiple calls to `read_documentation` with different `start_index` values for pagination
- For very long documents (>30,000 characters), stop reading if you've found the needed information
- Always cite the documentation URL when providing information to users

## Tool Selection Guide

- Use `get_available_services` when: You need to know what services are available in AWS China
- Use `read_documentation` when: You have a specific documentation URL and need its content
";

static AWS_URL_RE: OnceLock<Regex> = OnceLock::new();
static AWS_CN_URL_RE: OnceLock<Regex> = OnceLock::new();

/// Which AWS documentation site the server fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Global documentation at docs.aws.amazon.com
    Aws,
    /// China documentation at docs.amazonaws.cn
    AwsCn,
}

/// Reason a documentation URL was rejected before any fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("Invalid URL: {url}. URL must be from the {domain} domain")]
    WrongDomain { url: String, domain: &'static str },

    #[error("Invalid URL: {url}. URL must end with .html")]
    NotHtml { url: String },
}

impl Partition {
    /// Server name reported to MCP clients during initialization.
    pub fn server_name(&self) -> &'static str {
        "aws-documentation-mcp-server"
    }

    /// Documentation domain, used in validation error messages.
    pub fn domain(&self) -> &'static str {
        match self {
            Partition::Aws => "docs.aws.amazon.com",
            Partition::AwsCn => "docs.amazonaws.cn",
        }
    }

    /// Landing page probed by the health command.
    pub fn health_url(&self) -> &'static str {
        match self {
            Partition::Aws => "https://docs.aws.amazon.com/",
            Partition::AwsCn => "https://docs.amazonaws.cn/",
        }
    }

    /// Usage instructions delivered with the initialize response.
    pub fn instructions(&self) -> &'static str {
        match self {
            Partition::Aws => AWS_INSTRUCTIONS,
            Partition::AwsCn => AWS_CN_INSTRUCTIONS,
        }
    }

    fn url_pattern(&self) -> &'static Regex {
        match self {
            Partition::Aws => AWS_URL_RE.get_or_init(|| {
                Regex::new(r"^https?://docs\.aws\.amazon\.com/").expect("valid URL pattern")
            }),
            Partition::AwsCn => AWS_CN_URL_RE.get_or_init(|| {
                Regex::new(r"^https?://docs\.amazonaws\.cn/").expect("valid URL pattern")
            }),
        }
    }

    /// Checks that a URL belongs to this partition's documentation site and
    /// points at an HTML page.
    pub fn validate_url(&self, url: &str) -> Result<(), UrlValidationError> {
        if !self.url_pattern().is_match(url) {
            return Err(UrlValidationError::WrongDomain {
                url: url.to_string(),
                domain: self.domain(),
            });
        }
        if !url.ends_with(".html") {
            return Err(UrlValidationError::NotHtml {
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Aws => write!(f, "aws"),
            Partition::AwsCn => write!(f, "aws-cn"),
        }
    }
}

impl FromStr for Partition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(Partition::Aws),
            "aws-cn" | "aws_cn" => Ok(Partition::AwsCn),
            other => Err(format!(
                "Invalid partition: {}. Valid options: aws, aws-cn",
                other
            )),
        }
    }
}

//! AWS documentation access: fetching, conversion, search, recommendations.

pub mod cache;
pub mod client;
pub mod format;
pub mod html;
pub mod models;
pub mod partition;
pub mod recommendations;
pub mod search;

pub use cache::SearchResultCache;
pub use client::{DocsClient, DocsError, FetchedPage};
pub use format::format_documentation_result;
pub use html::{extract_content_from_html, extract_or_sentinel, is_html_content};
pub use models::{RecommendationResult, SearchResult};
pub use partition::{Partition, UrlValidationError};
pub use recommendations::parse_recommendation_results;
pub use search::parse_search_results;

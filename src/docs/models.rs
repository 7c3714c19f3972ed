//! Result types returned by the documentation tools.

use serde::{Deserialize, Serialize};

/// A single hit from the AWS documentation search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Relevance ranking, 1-based (lower is more relevant)
    pub rank_order: u32,

    /// Documentation page URL
    pub url: String,

    /// Page title
    pub title: String,

    /// Query id assigned by the search API, propagated to later page reads
    pub query_id: String,

    /// Excerpt or summary for the page, when the API provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A related-content entry from the AWS recommendations API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Documentation page URL
    pub url: String,

    /// Page title
    pub title: String,

    /// Short description of why the page was recommended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_roundtrip() {
        let result = SearchResult {
            rank_order: 1,
            url: "https://docs.aws.amazon.com/lambda/latest/dg/welcome.html".to_string(),
            title: "What is AWS Lambda?".to_string(),
            query_id: "query-123".to_string(),
            context: Some("Lambda is a compute service".to_string()),
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_search_result_without_context() {
        let result = SearchResult {
            rank_order: 2,
            url: "https://docs.aws.amazon.com/test".to_string(),
            title: "Test".to_string(),
            query_id: String::new(),
            context: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("context").is_none());
        assert_eq!(json["rank_order"], 2);
    }

    #[test]
    fn test_recommendation_result_roundtrip() {
        let result = RecommendationResult {
            url: "https://docs.aws.amazon.com/test".to_string(),
            title: "Test Page".to_string(),
            context: Some("Similar content".to_string()),
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: RecommendationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_recommendation_result_optional_context() {
        let parsed: RecommendationResult = serde_json::from_str(
            r#"{"url":"https://docs.aws.amazon.com/test","title":"Test"}"#,
        )
        .unwrap();
        assert!(parsed.context.is_none());
    }
}

//! Search API response parsing.
//!
//! The documentation search API returns a `queryId` and a list of
//! suggestions. Only `textExcerptSuggestion` entries become results; the
//! context snippet for each result is chosen by priority from the suggestion
//! metadata (the SEO abstract is authored for exactly this purpose, the
//! remaining fields are fallbacks of decreasing quality).

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

use super::models::SearchResult;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchApiResponse {
    #[serde(default)]
    query_id: Option<String>,

    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Suggestion {
    #[serde(default)]
    text_excerpt_suggestion: Option<TextExcerptSuggestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextExcerptSuggestion {
    #[serde(default)]
    link: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    summary: Option<String>,

    #[serde(default)]
    suggestion_body: Option<String>,

    #[serde(default)]
    metadata: HashMap<String, Value>,
}

impl TextExcerptSuggestion {
    /// Context priority: seo_abstract, abstract, summary, suggestionBody.
    fn context(&self) -> Option<String> {
        for key in ["seo_abstract", "abstract"] {
            if let Some(value) = self.metadata.get(key).and_then(Value::as_str) {
                return Some(value.to_string());
            }
        }
        self.summary.clone().or_else(|| self.suggestion_body.clone())
    }
}

/// Parses a raw search API response into ranked results, keeping at most
/// `limit` suggestions. Suggestions without a text excerpt keep their rank
/// slot but produce no result.
pub fn parse_search_results(data: Value, limit: usize) -> Vec<SearchResult> {
    let response: SearchApiResponse = match serde_json::from_value(data) {
        Ok(response) => response,
        Err(e) => {
            warn!("Unexpected search response shape: {e}");
            return Vec::new();
        }
    };

    let query_id = response.query_id.unwrap_or_default();
    let mut results = Vec::new();

    for (i, suggestion) in response.suggestions.into_iter().take(limit).enumerate() {
        let Some(excerpt) = suggestion.text_excerpt_suggestion else {
            continue;
        };

        let context = excerpt.context();
        results.push(SearchResult {
            rank_order: (i + 1) as u32,
            url: excerpt.link.unwrap_or_default(),
            title: excerpt.title.unwrap_or_default(),
            query_id: query_id.clone(),
            context,
        });
    }

    results
}

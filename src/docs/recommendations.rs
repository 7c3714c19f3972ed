//! Recommendations API response parsing.
//!
//! The content recommendations API groups related pages into four sections:
//! highly rated pages within the service, journey pages (grouped by user
//! intent), newly published pages, and similar pages. Results keep that
//! order so clients can tell the categories apart by position and context.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::models::RecommendationResult;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationApiResponse {
    #[serde(default)]
    highly_rated: Section,

    #[serde(default)]
    journey: JourneySection,

    #[serde(default)]
    new: Section,

    #[serde(default)]
    similar: Section,
}

#[derive(Debug, Default, Deserialize)]
struct Section {
    #[serde(default)]
    items: Vec<SectionItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionItem {
    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    asset_title: Option<String>,

    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,

    #[serde(default)]
    date_created: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct JourneySection {
    #[serde(default)]
    items: Vec<JourneyIntentGroup>,
}

#[derive(Debug, Default, Deserialize)]
struct JourneyIntentGroup {
    #[serde(default)]
    intent: Option<String>,

    #[serde(default)]
    urls: Vec<JourneyUrl>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JourneyUrl {
    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    asset_title: Option<String>,
}

/// Parses a raw recommendations API response into a flat result list,
/// ordered highly-rated, journey, new, similar.
pub fn parse_recommendation_results(data: Value) -> Vec<RecommendationResult> {
    let response: RecommendationApiResponse = match serde_json::from_value(data) {
        Ok(response) => response,
        Err(e) => {
            warn!("Unexpected recommendations response shape: {e}");
            return Vec::new();
        }
    };

    let mut results = Vec::new();

    for item in response.highly_rated.items {
        results.push(RecommendationResult {
            url: item.url.unwrap_or_default(),
            title: item.asset_title.unwrap_or_default(),
            context: item.abstract_text,
        });
    }

    for intent_group in response.journey.items {
        let intent = intent_group.intent.unwrap_or_default();
        for url_item in intent_group.urls {
            let context = if intent.is_empty() {
                None
            } else {
                Some(format!("Intent: {intent}"))
            };
            results.push(RecommendationResult {
                url: url_item.url.unwrap_or_default(),
                title: url_item.asset_title.unwrap_or_default(),
                context,
            });
        }
    }

    for item in response.new.items {
        let context = match item.date_created.as_deref() {
            Some(date) if !date.is_empty() => format!("New content added on {date}"),
            _ => "New content".to_string(),
        };
        results.push(RecommendationResult {
            url: item.url.unwrap_or_default(),
            title: item.asset_title.unwrap_or_default(),
            context: Some(context),
        });
    }

    for item in response.similar.items {
        let context = item
            .abstract_text
            .unwrap_or_else(|| "Similar content".to_string());
        results.push(RecommendationResult {
            url: item.url.unwrap_or_default(),
            title: item.asset_title.unwrap_or_default(),
            context: Some(context),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_data() {
        assert!(parse_recommendation_results(json!({})).is_empty());
    }

    #[test]
    fn test_highly_rated_recommendations() {
        let data = json!({
            "highlyRated": {
                "items": [
                    {
                        "url": "https://docs.aws.amazon.com/test1",
                        "assetTitle": "Test 1",
                        "abstract": "Abstract 1",
                    },
                    {"url": "https://docs.aws.amazon.com/test2", "assetTitle": "Test 2"},
                ]
            }
        });

        let results = parse_recommendation_results(data);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://docs.aws.amazon.com/test1");
        assert_eq!(results[0].title, "Test 1");
        assert_eq!(results[0].context.as_deref(), Some("Abstract 1"));
        assert_eq!(results[1].title, "Test 2");
        assert!(results[1].context.is_none());
    }

    #[test]
    fn test_journey_recommendations() {
        let data = json!({
            "journey": {
                "items": [
                    {
                        "intent": "Get started",
                        "urls": [
                            {"url": "https://docs.aws.amazon.com/a", "assetTitle": "A"},
                            {"url": "https://docs.aws.amazon.com/b", "assetTitle": "B"},
                        ],
                    },
                    {
                        "urls": [
                            {"url": "https://docs.aws.amazon.com/c", "assetTitle": "C"},
                        ],
                    },
                ]
            }
        });

        let results = parse_recommendation_results(data);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].context.as_deref(), Some("Intent: Get started"));
        assert_eq!(results[1].context.as_deref(), Some("Intent: Get started"));
        assert!(results[2].context.is_none());
    }

    #[test]
    fn test_new_recommendations() {
        let data = json!({
            "new": {
                "items": [
                    {
                        "url": "https://docs.aws.amazon.com/new1",
                        "assetTitle": "New 1",
                        "dateCreated": "2024-03-01",
                    },
                    {"url": "https://docs.aws.amazon.com/new2", "assetTitle": "New 2"},
                ]
            }
        });

        let results = parse_recommendation_results(data);
        assert_eq!(
            results[0].context.as_deref(),
            Some("New content added on 2024-03-01")
        );
        assert_eq!(results[1].context.as_deref(), Some("New content"));
    }

    #[test]
    fn test_similar_recommendations() {
        let data = json!({
            "similar": {
                "items": [
                    {
                        "url": "https://docs.aws.amazon.com/sim1",
                        "assetTitle": "Sim 1",
                        "abstract": "About this page",
                    },
                    {"url": "https://docs.aws.amazon.com/sim2", "assetTitle": "Sim 2"},
                ]
            }
        });

        let results = parse_recommendation_results(data);
        assert_eq!(results[0].context.as_deref(), Some("About this page"));
        assert_eq!(results[1].context.as_deref(), Some("Similar content"));
    }

    #[test]
    fn test_category_ordering() {
        let data = json!({
            "similar": {"items": [{"url": "https://docs.aws.amazon.com/s", "assetTitle": "S"}]},
            "new": {"items": [{"url": "https://docs.aws.amazon.com/n", "assetTitle": "N"}]},
            "journey": {"items": [{"intent": "x", "urls": [{"url": "https://docs.aws.amazon.com/j", "assetTitle": "J"}]}]},
            "highlyRated": {"items": [{"url": "https://docs.aws.amazon.com/h", "assetTitle": "H"}]},
        });

        let titles: Vec<String> = parse_recommendation_results(data)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["H", "J", "N", "S"]);
    }

    #[test]
    fn test_section_without_items() {
        let data = json!({"highlyRated": {}});
        assert!(parse_recommendation_results(data).is_empty());
    }
}

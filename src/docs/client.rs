//! HTTP client for the AWS documentation endpoints.
//!
//! One pooled reqwest client fronts the three outbound surfaces: plain page
//! fetches, the documentation search API, and the content recommendations
//! API. Every request carries a per-process session id, both as a query
//! parameter and as the `X-MCP-Session-Id` header, plus a User-Agent that
//! identifies the server and its version.

use reqwest::header;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const SEARCH_API_URL: &str = "https://proxy.search.docs.aws.amazon.com/search";
pub const RECOMMENDATIONS_API_URL: &str =
    "https://contentrecs-api.docs.aws.amazon.com/v1/recommendations";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from the documentation endpoints. Display strings double as the
/// messages returned to MCP clients, so they are phrased per operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocsError {
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to fetch {url} - status code {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("Error searching AWS docs: {message}")]
    Search { message: String },

    #[error("Error searching AWS docs - status code {status}")]
    SearchStatus { status: u16 },

    #[error("Error parsing search results: {message}")]
    SearchParse { message: String },

    #[error("Error getting recommendations: {message}")]
    Recommend { message: String },

    #[error("Error getting recommendations - status code {status}")]
    RecommendStatus { status: u16 },

    #[error("Error parsing recommendations: {message}")]
    RecommendParse { message: String },

    #[error("Failed to build HTTP client: {message}")]
    ClientInit { message: String },
}

/// A fetched documentation page before HTML handling.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    pub content_type: String,
}

/// Client for AWS documentation pages and their companion APIs.
///
/// Thread-safe; share it with `Arc` across tools.
pub struct DocsClient {
    http: reqwest::Client,
    session_id: String,
    user_agent: String,
    timeout: Duration,
}

impl DocsClient {
    pub fn new(timeout: Duration) -> Result<Self, DocsError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DocsError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            session_id: Uuid::new_v4().to_string(),
            user_agent: default_user_agent(),
            timeout,
        })
    }

    /// Session id attached to every outbound request for this process.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Fetches a documentation page, following redirects. The `query_id`
    /// from a prior search, when known, is forwarded so the documentation
    /// service can correlate the read with the search.
    pub async fn fetch_page(
        &self,
        url: &str,
        query_id: Option<&str>,
    ) -> Result<FetchedPage, DocsError> {
        debug!("Fetching documentation from {url}");

        let mut query: Vec<(&str, &str)> = vec![("session", self.session_id.as_str())];
        if let Some(query_id) = query_id {
            debug!("Using query_id {query_id}");
            query.push(("query_id", query_id));
        }

        let response = self
            .http
            .get(url)
            .query(&query)
            .header(header::USER_AGENT, &self.user_agent)
            .header("X-MCP-Session-Id", &self.session_id)
            .send()
            .await
            .map_err(|e| DocsError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(DocsError::FetchStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response.text().await.map_err(|e| DocsError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(FetchedPage { body, content_type })
    }

    /// Runs a search against the documentation search API and returns the
    /// raw response body.
    pub async fn search(&self, search_phrase: &str) -> Result<Value, DocsError> {
        let request_body = json!({
            "textQuery": {
                "input": search_phrase,
            },
            "contextAttributes": [{"key": "domain", "value": "docs.aws.amazon.com"}],
            "acceptSuggestionBody": "RawText",
            "locales": ["en_us"],
        });

        let response = self
            .http
            .post(SEARCH_API_URL)
            .query(&[("session", self.session_id.as_str())])
            .json(&request_body)
            .header(header::USER_AGENT, &self.user_agent)
            .header("X-MCP-Session-Id", &self.session_id)
            .send()
            .await
            .map_err(|e| DocsError::Search {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(DocsError::SearchStatus {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| DocsError::SearchParse {
            message: e.to_string(),
        })
    }

    /// Requests related-content recommendations for a documentation URL and
    /// returns the raw response body.
    pub async fn recommendations(&self, url: &str) -> Result<Value, DocsError> {
        let response = self
            .http
            .get(RECOMMENDATIONS_API_URL)
            .query(&[("path", url), ("session", self.session_id.as_str())])
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| DocsError::Recommend {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(DocsError::RecommendStatus {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| DocsError::RecommendParse {
                message: e.to_string(),
            })
    }

    /// Probes a documentation landing page to verify reachability.
    ///
    /// Returns `Ok(false)` for timeouts and refused connections so callers
    /// can report an unhealthy endpoint without treating it as a hard error.
    pub async fn health_check(&self, url: &str) -> Result<bool, DocsError> {
        debug!("Checking documentation endpoint at {url}");

        match self
            .http
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
        {
            Ok(response) => {
                let is_healthy = response.status().is_success();
                if is_healthy {
                    info!("Documentation endpoint {url} is reachable");
                } else {
                    warn!(
                        "Documentation endpoint {url} returned status {}",
                        response.status()
                    );
                }
                Ok(is_healthy)
            }
            Err(e) => {
                if e.is_timeout() {
                    warn!("Health check timed out after {:?}", self.timeout);
                    Ok(false)
                } else if e.is_connect() {
                    warn!("Cannot connect to {url}");
                    Ok(false)
                } else {
                    error!("Health check error: {e}");
                    Err(DocsError::Fetch {
                        url: url.to_string(),
                        message: e.to_string(),
                    })
                }
            }
        }
    }
}

impl std::fmt::Debug for DocsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsClient")
            .field("session_id", &self.session_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Browser-style User-Agent carrying the crate version, matching what the
/// documentation endpoints expect from MCP traffic.
pub(crate) fn default_user_agent() -> String {
    format!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36 ModelContextProtocol/{} (AWS Documentation Server)",
        crate::VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        let user_agent = default_user_agent();
        assert!(user_agent.contains(&format!("ModelContextProtocol/{}", crate::VERSION)));
        assert!(user_agent.contains("AWS Documentation Server"));
    }

    #[test]
    fn test_session_id_is_stable_per_client() {
        let client = DocsClient::new(Duration::from_secs(5)).unwrap();
        assert_eq!(client.session_id(), client.session_id());
        assert_eq!(client.session_id().len(), 36);
    }

    #[test]
    fn test_clients_get_distinct_sessions() {
        let a = DocsClient::new(Duration::from_secs(5)).unwrap();
        let b = DocsClient::new(Duration::from_secs(5)).unwrap();
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn test_error_messages() {
        let err = DocsError::FetchStatus {
            url: "https://docs.aws.amazon.com/test.html".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://docs.aws.amazon.com/test.html - status code 404"
        );

        let err = DocsError::SearchStatus { status: 500 };
        assert_eq!(err.to_string(), "Error searching AWS docs - status code 500");
    }
}

//! Tavily search API client

use super::traits::{SearchProvider, SearchResult};
use crate::error::SearchError;
use crate::network::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Client for the Tavily web search API
///
/// Credentials and endpoint are injected at construction time; nothing here
/// reads the environment.
pub struct TavilyClient {
    client: HttpClient,
    api_key: String,
    base_url: String,
    max_results: usize,
}

/// Tavily `/search` response payload
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    /// Tavily calls the snippet field "content"
    #[serde(default)]
    content: String,
    #[serde(default)]
    url: String,
}

impl TavilyClient {
    /// Create a new Tavily client
    pub fn new(
        client: HttpClient,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            max_results: 5,
        }
    }

    /// Set the maximum number of results to request
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let body = json!({
            "api_key": self.api_key,
            "query": query,
            "max_results": self.max_results,
        });

        let response = self
            .client
            .post_json(&self.endpoint(), None, &body)
            .await
            .map_err(|e| SearchError::Unavailable(e.to_string()))?;

        if response.is_auth_error() {
            return Err(SearchError::Auth {
                status: response.status,
            });
        }
        if !response.is_success() {
            return Err(SearchError::Unavailable(format!(
                "HTTP {}",
                response.status
            )));
        }

        let parsed: TavilyResponse = response
            .json()
            .map_err(|e| SearchError::Unavailable(format!("invalid response body: {}", e)))?;

        debug!("Tavily returned {} results", parsed.results.len());

        Ok(parsed
            .results
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                snippet: r.content,
                url: r.url,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tavily_for(server: &MockServer) -> TavilyClient {
        TavilyClient::new(HttpClient::new().unwrap(), "tvly-test", server.uri())
    }

    #[tokio::test]
    async fn test_search_parses_results_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({"query": "rust async"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"title": "First", "content": "one", "url": "http://a"},
                    {"title": "Second", "content": "two", "url": "http://b"},
                    {"title": "Third", "content": "three", "url": "http://c"}
                ]
            })))
            .mount(&server)
            .await;

        let results = tavily_for(&server).search("rust async").await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], SearchResult::new("First", "one", "http://a"));
        assert_eq!(results[2], SearchResult::new("Third", "three", "http://c"));
    }

    #[tokio::test]
    async fn test_search_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let results = tavily_for(&server).search("nothing").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = tavily_for(&server).search("query").await.unwrap_err();
        assert!(matches!(err, SearchError::Auth { status: 401 }));
    }

    #[tokio::test]
    async fn test_search_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = tavily_for(&server).search("query").await.unwrap_err();
        assert!(matches!(err, SearchError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = tavily_for(&server).search("query").await.unwrap_err();
        assert!(matches!(err, SearchError::Unavailable(_)));
    }
}

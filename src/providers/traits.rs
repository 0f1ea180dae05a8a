//! Collaborator traits and types

use crate::error::{ModelError, SearchError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single web search result
///
/// Produced by a [`SearchProvider`] in relevance order. Immutable once
/// returned; the pipeline never re-sorts or rewrites results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title
    pub title: String,
    /// Content snippet/description
    pub snippet: String,
    /// The URL of the result
    pub url: String,
}

impl SearchResult {
    /// Create a new search result
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
        }
    }
}

/// Web search capability
///
/// Relevance ranking, rate limiting, and query interpretation are the
/// provider's responsibility. Implementations surface failures without
/// retrying.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search and return results in the provider's order
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Chat completion capability
///
/// One request, one free-text completion. Implementations keep no
/// conversation state between calls.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Complete a single system + user message exchange
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_construction() {
        let result = SearchResult::new("Title", "Snippet", "http://example.com");
        assert_eq!(result.title, "Title");
        assert_eq!(result.snippet, "Snippet");
        assert_eq!(result.url, "http://example.com");
    }

    #[test]
    fn test_search_result_serde_round_trip() {
        let result = SearchResult::new("A", "b", "http://c");
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}

//! Search collection stage

use crate::error::SearchError;
use crate::providers::{SearchProvider, SearchResult};
use std::sync::Arc;
use tracing::info;

/// First pipeline stage: gathers web results for the research query
pub struct Collector {
    provider: Arc<dyn SearchProvider>,
}

impl Collector {
    /// Create a new collector over a search provider
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Run one search, preserving the provider's relevance order
    ///
    /// Zero results is a valid outcome, not an error. Failures are surfaced
    /// unmodified; there is no local retry.
    pub async fn collect(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        info!("Gathering information from the web");
        let results = self.provider.search(query).await?;
        info!("Collected {} search results", results.len());
        Ok(results)
    }
}

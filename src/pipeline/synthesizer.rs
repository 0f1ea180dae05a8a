//! Analysis stage
//!
//! Formats the collected results into a fixed context block and asks the
//! model for a synthesis. The formatting is deterministic so identical
//! inputs always produce identical requests.

use crate::error::ModelError;
use crate::providers::{ChatModel, SearchResult};
use std::sync::Arc;
use tracing::info;

const ANALYST_SYSTEM_PROMPT: &str = "\
You are an expert research analyst. Your task is to:
1. Analyze the provided research materials
2. Identify key insights and patterns
3. Synthesize the information into a coherent analysis
4. Highlight any contradictions or gaps in the research
5. Provide recommendations for further research if needed

Be thorough, objective, and maintain academic rigor in your analysis.";

/// Render search results into the fixed context block format
///
/// Each result becomes three lines (`Source:`, `Content:`, `URL:`); blocks
/// are joined with a single newline, input order preserved. Empty input
/// yields an empty string.
pub fn format_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("Source: {}\nContent: {}\nURL: {}", r.title, r.snippet, r.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Second pipeline stage: synthesizes search results into an analysis
pub struct Synthesizer {
    model: Arc<dyn ChatModel>,
    temperature: f32,
}

impl Synthesizer {
    /// Create a new synthesizer over a chat model
    pub fn new(model: Arc<dyn ChatModel>, temperature: f32) -> Self {
        Self { model, temperature }
    }

    /// Analyze the gathered results against the original query
    ///
    /// An empty result set is still sent — with an empty context block — so
    /// the model can state that no material was found. The model's text is
    /// returned verbatim.
    pub async fn synthesize(
        &self,
        query: &str,
        results: &[SearchResult],
    ) -> Result<String, ModelError> {
        info!("Analyzing gathered information");

        let context = format_context(results);
        let user_prompt = format!(
            "Research Query: {}\n\nResearch Materials:\n{}\n\nPlease provide a detailed analysis of the research findings.",
            query, context
        );

        self.model
            .complete(ANALYST_SYSTEM_PROMPT, &user_prompt, self.temperature)
            .await
    }
}

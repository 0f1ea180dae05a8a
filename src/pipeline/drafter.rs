//! Drafting stage

use crate::error::ModelError;
use crate::providers::ChatModel;
use std::sync::Arc;
use tracing::info;

const DRAFTER_SYSTEM_PROMPT: &str = "\
You are an expert content drafter. Your task is to:
1. Create a well-structured, comprehensive response
2. Use clear and professional language
3. Include relevant citations and sources
4. Maintain objectivity and accuracy
5. Format the response for easy reading

The response should be informative, engaging, and authoritative.";

/// Final pipeline stage: drafts the response from the analysis
pub struct Drafter {
    model: Arc<dyn ChatModel>,
    temperature: f32,
}

impl Drafter {
    /// Create a new drafter over a chat model
    pub fn new(model: Arc<dyn ChatModel>, temperature: f32) -> Self {
        Self { model, temperature }
    }

    /// Draft the final response to the original query
    ///
    /// An empty analysis is still sent; how to answer without material is
    /// the model's call. The model's text is returned verbatim.
    pub async fn draft(&self, query: &str, analysis: &str) -> Result<String, ModelError> {
        info!("Creating final response");

        let user_prompt = format!(
            "Original Query: {}\n\nResearch Analysis:\n{}\n\nPlease draft a comprehensive response to the original query.",
            query, analysis
        );

        self.model
            .complete(DRAFTER_SYSTEM_PROMPT, &user_prompt, self.temperature)
            .await
    }
}

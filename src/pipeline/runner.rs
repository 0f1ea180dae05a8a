//! Pipeline sequencing

use super::{Collector, Drafter, Synthesizer};
use crate::error::{PipelineError, Stage};
use crate::providers::{ChatModel, SearchProvider};
use std::sync::Arc;
use tracing::info;

/// The full research pipeline
///
/// Stages run strictly in order; any failure aborts the run and is returned
/// tagged with the stage that produced it. Collaborator handles are owned by
/// their stage and are not shared, so concurrent runs must each build their
/// own `Pipeline`.
pub struct Pipeline {
    collector: Collector,
    synthesizer: Synthesizer,
    drafter: Drafter,
}

impl Pipeline {
    /// Create a pipeline from pre-built stages
    pub fn new(collector: Collector, synthesizer: Synthesizer, drafter: Drafter) -> Self {
        Self {
            collector,
            synthesizer,
            drafter,
        }
    }

    /// Wire a pipeline from one search provider and one chat model per
    /// generation stage
    pub fn with_providers(
        search: Arc<dyn SearchProvider>,
        analyst: Arc<dyn ChatModel>,
        drafter: Arc<dyn ChatModel>,
        temperature: f32,
    ) -> Self {
        Self::new(
            Collector::new(search),
            Synthesizer::new(analyst, temperature),
            Drafter::new(drafter, temperature),
        )
    }

    /// Run the pipeline end to end for one query
    ///
    /// `collect → synthesize → draft`, each stage a full precondition for
    /// the next. The first failure short-circuits the run.
    pub async fn run(&self, query: &str) -> Result<String, PipelineError> {
        let results = self
            .collector
            .collect(query)
            .await
            .map_err(|source| PipelineError::Search {
                stage: Stage::Collect,
                source,
            })?;

        let analysis = self
            .synthesizer
            .synthesize(query, &results)
            .await
            .map_err(|source| PipelineError::Model {
                stage: Stage::Analyze,
                source,
            })?;

        let response = self
            .drafter
            .draft(query, &analysis)
            .await
            .map_err(|source| PipelineError::Model {
                stage: Stage::Draft,
                source,
            })?;

        info!("Research run complete");
        Ok(response)
    }
}

//! Error types for the research pipeline
//!
//! Every failure originates in an external collaborator (the search API or
//! the model API). Errors are classified per stage and surfaced unchanged;
//! there is no retry, backoff, or fallback anywhere in the pipeline.

use std::fmt;
use thiserror::Error;

/// Pipeline stage, used to attribute a failure to the step that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Gathering web search results
    Collect,
    /// Synthesizing results into an analysis
    Analyze,
    /// Drafting the final response
    Draft,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Collect => "collect",
            Stage::Analyze => "analyze",
            Stage::Draft => "draft",
        };
        f.write_str(name)
    }
}

/// Failures from the search collaborator
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure or a non-auth HTTP error from the search API
    #[error("search provider unavailable: {0}")]
    Unavailable(String),

    /// Credentials rejected by the search API
    #[error("search provider rejected credentials (HTTP {status})")]
    Auth { status: u16 },
}

/// Failures from the language-model collaborator
#[derive(Debug, Error)]
pub enum ModelError {
    /// Transport failure or a non-auth HTTP error from the model API
    #[error("model provider unavailable: {0}")]
    Unavailable(String),

    /// Credentials rejected by the model API
    #[error("model provider rejected credentials (HTTP {status})")]
    Auth { status: u16 },

    /// The API answered but the completion carried no content
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// A pipeline failure, tagged with the stage it occurred in
///
/// Carries the underlying provider error unmodified so a caller can tell
/// "search failed" apart from "generation failed".
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("search failed during {stage} stage: {source}")]
    Search {
        stage: Stage,
        #[source]
        source: SearchError,
    },

    #[error("generation failed during {stage} stage: {source}")]
    Model {
        stage: Stage,
        #[source]
        source: ModelError,
    },
}

impl PipelineError {
    /// The stage that produced this failure
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Search { stage, .. } => *stage,
            PipelineError::Model { stage, .. } => *stage,
        }
    }
}

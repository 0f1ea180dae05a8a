//! Research-RS: an AI-assisted web research pipeline written in Rust
//!
//! Takes a single research question, gathers web search results from an
//! external search API, has a language model synthesize them into an
//! analysis, and drafts a final answer from that analysis with a second
//! model call. One query in, one drafted response out.

pub mod config;
pub mod error;
pub mod network;
pub mod pipeline;
pub mod providers;

pub use config::Settings;
pub use error::{ModelError, PipelineError, SearchError, Stage};
pub use pipeline::Pipeline;
pub use providers::{ChatModel, SearchProvider, SearchResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for collaborator API requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 60;

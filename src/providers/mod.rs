//! Collaborator clients
//!
//! Defines the capability traits for the two external collaborators — web
//! search and chat completion — and the concrete API clients behind them.
//! The pipeline only ever sees the traits, so it can be exercised against
//! deterministic stubs.

mod traits;

// Provider implementations
pub mod groq;
pub mod tavily;

pub use groq::GroqClient;
pub use tavily::TavilyClient;
pub use traits::*;

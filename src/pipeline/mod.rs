//! The three-stage research pipeline
//!
//! Control flow is a strict linear sequence: collect search results, have a
//! model synthesize them into an analysis, then draft the final response
//! from that analysis. Each stage's output is the next stage's sole input,
//! and the first failure aborts the run. There is deliberately no workflow
//! engine behind this; the sequence is fixed.

mod collector;
mod drafter;
mod runner;
mod synthesizer;

pub use collector::Collector;
pub use drafter::Drafter;
pub use runner::Pipeline;
pub use synthesizer::{format_context, Synthesizer};

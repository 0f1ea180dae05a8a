//! HTTP networking module
//!
//! Provides the HTTP client used by the collaborator API clients.

mod client;

pub use client::{ApiResponse, HttpClient};

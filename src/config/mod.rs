//! Configuration module for Research-RS
//!
//! Handles loading and validating settings from YAML files and environment
//! variables. Settings are resolved once at startup and injected into the
//! collaborator clients; nothing below this layer reads the environment.

mod settings;

pub use settings::*;

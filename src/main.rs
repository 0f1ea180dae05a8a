//! Research-RS: an AI-assisted web research pipeline
//!
//! This is the main entry point for the application.

use anyhow::{bail, Result};
use research_rs::{
    config::Settings,
    network::HttpClient,
    pipeline::Pipeline,
    providers::{GroqClient, TavilyClient},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("research-rs v{}", research_rs::VERSION);
        return Ok(());
    }

    let query = args.join(" ");
    let query = query.trim();
    if query.is_empty() {
        print_usage();
        bail!("a research query is required");
    }

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting research-rs v{}", research_rs::VERSION);

    // Load configuration; missing credentials are fatal here, never later
    let settings = load_settings()?;
    settings.validate()?;

    // Construct collaborator clients; each stage owns its own handle
    let client = HttpClient::new()?;
    let search = TavilyClient::new(
        client.clone(),
        &settings.search.api_key,
        &settings.search.base_url,
    )
    .with_max_results(settings.search.max_results);
    let analyst = GroqClient::new(
        client.clone(),
        &settings.model.api_key,
        &settings.model.base_url,
        &settings.model.model,
    );
    let drafter = GroqClient::new(
        client,
        &settings.model.api_key,
        &settings.model.base_url,
        &settings.model.model,
    );

    let pipeline = Pipeline::with_providers(
        Arc::new(search),
        Arc::new(analyst),
        Arc::new(drafter),
        settings.model.temperature,
    );

    let response = pipeline.run(query).await?;
    println!("{}", response);

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("RESEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    let paths = [
        PathBuf::from("settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("research-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Research-RS v{}
An AI-assisted web research pipeline written in Rust

USAGE:
    research-rs [OPTIONS] <QUERY>

OPTIONS:
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    TAVILY_API_KEY          API key for the Tavily search provider (required)
    GROQ_API_KEY            API key for the Groq model provider (required)
    RESEARCH_MODEL          Override the chat model name
    RESEARCH_MAX_RESULTS    Number of search results to request
    RESEARCH_SETTINGS_PATH  Path to settings.yml

The query runs through three stages: web search, analysis, and drafting.
The drafted response is printed to stdout.
"#,
        research_rs::VERSION
    );
}

//! Syllo Console - a terminal console for a ColPali-style PDF search backend
//!
//! This is the binary entry point. All logic lives in the workspace crates:
//! `syllo-core` (types), `syllo-client` (HTTP), `syllo-app` (state),
//! `syllo-tui` (interface).

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use url::Url;

use syllo_app::Settings;
use syllo_client::{HttpService, SearchService};
use syllo_core::redact;

/// Syllo Console - search and index PDF documents from the terminal
#[derive(Parser, Debug)]
#[command(name = "syllo")]
#[command(about = "Terminal console for a PDF search and indexing service", long_about = None)]
struct Args {
    /// Backend base URL (overrides config.toml)
    #[arg(long, value_name = "URL")]
    backend: Option<String>,

    /// Bearer token for the authenticated endpoints (overrides config.toml)
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,

    /// Explicit config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a single search and print the JSON response (no TUI)
    #[arg(long, value_name = "QUERY")]
    headless: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file; the terminal belongs to the TUI
    syllo_core::logging::init()?;

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    if let Some(backend) = args.backend {
        settings.backend.base_url = backend;
    }
    if let Some(token) = args.token {
        settings.backend.token = Some(token);
    }

    let base_url = Url::parse(&settings.backend.base_url)
        .wrap_err_with(|| format!("invalid backend URL: {}", settings.backend.base_url))?;

    let service: Arc<dyn SearchService> =
        Arc::new(HttpService::new(base_url, settings.backend.token.clone()));

    match args.headless {
        Some(query) => run_headless(service, &query).await,
        None => Ok(syllo_tui::run(service, &settings).await?),
    }
}

/// One search, response printed to stdout with image payloads elided
async fn run_headless(service: Arc<dyn SearchService>, query: &str) -> Result<()> {
    let response = service
        .search(query)
        .await
        .wrap_err("search request failed")?;
    println!("{}", redact::to_display_json(&response)?);
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod assemble;
mod cli;
mod enrich;
mod request;
mod services;
mod workflow;

use cli::{Command, RootArgs};
use enrich::EnrichmentClient;
use request::ReadmeRequest;
use services::{Credentials, GeminiText, GiphySearch};

fn main() -> Result<()> {
    // Default to warn so enrichment fallback notices reach stderr without
    // any configuration; RUST_LOG still overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = RootArgs::parse();
    match cli.command {
        Command::Init(args) => cmd_init(args),
    }
}

fn cmd_init(args: cli::InitArgs) -> Result<()> {
    let request = ReadmeRequest::from_args(args);
    let credentials = Credentials::from_env();
    let client = EnrichmentClient::new(
        GeminiText::new(credentials.gemini_api_key),
        GiphySearch::new(credentials.giphy_api_key),
    );
    workflow::run_init(&request, &client)
}

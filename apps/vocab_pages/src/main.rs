mod config;
mod errors;
mod llm_client;
mod notion_client;
mod state;
mod vocab;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::notion_client::NotionClient;
use crate::state::AppContext;
use crate::vocab::pipeline::run_batch;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vocab_pages v{}", env!("CARGO_PKG_VERSION"));

    let notion = NotionClient::new(config.notion_api_key.clone(), config.notion_api_base.clone())?;
    info!("Notion client initialized (database: {})", config.notion_database_id);

    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_api_base.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let ctx = AppContext::new(config, Arc::new(notion), Arc::new(llm));

    // Per-word failures are logged inside the batch; the run still exits 0.
    run_batch(&ctx).await;

    Ok(())
}

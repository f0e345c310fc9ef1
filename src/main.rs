use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use yatra::{GroqClient, ItineraryPlanner, VERSION, YatraConfig, logging, web};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    dotenv::dotenv().ok();

    let config = YatraConfig::load()?;
    logging::init(&config.logging)?;
    tracing::info!("Starting Yatra v{VERSION}");
    tracing::info!("Using model {} at {}", config.llm.model, config.llm.base_url);

    let client = GroqClient::new(&config.llm)?;
    let planner = Arc::new(ItineraryPlanner::new(Arc::new(client)));

    web::run(&config.server, planner).await
}

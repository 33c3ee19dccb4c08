//! Neon Agent - Demo Entry Point
//!
//! Runs the agent once with a fixed instruction and prints the conversation.

use neon_agent::{agent::Agent, config::Config, graph};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The fixed demo instruction.
const SAMPLE_PROMPT: &str = "Create a new Neon project called langgraph and create a table named users. Add 10 sample records to the table. Then print the records as a markdown table.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env settings before reading configuration
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neon_agent=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration: model={}", config.model);

    // Build and run the agent
    let agent = Agent::new(config.clone());
    let transcript = agent.run(SAMPLE_PROMPT).await?;

    println!("Step by Step execution : ");
    for message in &transcript {
        println!("{}", message.render());
    }

    // Write the control-flow diagram as a side effect of the run
    graph::write_diagram(&config.graph_output_path)?;
    info!("Wrote agent graph to {}", config.graph_output_path.display());

    Ok(())
}

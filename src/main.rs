use anyhow::Result;
use tracing_subscriber::EnvFilter;
use weathernow::query::QueryState;
use weathernow::{WeatherNowConfig, WeatherQueryOrchestrator, render};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WeatherNowConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let query: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let mut orchestrator = WeatherQueryOrchestrator::new(&config)?;
    match orchestrator.run_query(&query).await {
        QueryState::Success(result) => print!("{}", render::render(result)),
        QueryState::Failed(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        QueryState::Idle | QueryState::Loading => {}
    }

    Ok(())
}

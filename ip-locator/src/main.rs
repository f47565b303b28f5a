pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use anyhow::Context;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .init();
    let config = config::Config::load()?;
    let state =
        adapters::app_state::AppState::new(config).context("Failed to create lookup client")?;
    tracing::debug!(config = ?state.config, "Loaded configuration");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    adapters::menu::run(state.lookup_service.as_ref(), stdin, &mut stdout)
        .await
        .context("Console session failed")?;
    Ok(())
}

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use store::MatchStore;
use store::config::AppConfig;
use store::database;

/// Prepare the match store database: connect, sync the schema and indexes, then exit.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    info!("Database schema synchronized");

    let store = MatchStore::new(db, config.matches.video_hosts());
    info!(
        video_hosts = ?store.video_hosts().hosts(),
        "Match store ready"
    );

    Ok(())
}

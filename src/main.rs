use anyhow::{Context, Result};
use chargemind_trends::config::{LoggingSettings, Settings};
use chargemind_trends::domain::config_types::LogFormat;
use chargemind_trends::infrastructure::key_value::JsonFileStore;
use chargemind_trends::infrastructure::log_messages::configuration;
use chargemind_trends::Application;
use std::sync::Arc;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("failed to load configuration")?;

    // Initialize tracing; RUST_LOG takes precedence over the configured level
    init_tracing(&settings.logging);

    let store = Arc::new(JsonFileStore::new(&settings.storage.path));
    info!(
        environment = %settings.application.environment,
        storage = %store.path().display(),
        "{}",
        configuration::CONFIG_LOADED
    );

    let app = Application::new(settings, store)
        .await
        .context("failed to start trend service")?;

    app.run(BufReader::new(io::stdin()), io::stdout())
        .await
        .context("trend batch failed")?;

    Ok(())
}

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

use std::sync::Arc;

use anyhow::anyhow;

use envsense_server::configs::Settings;
use envsense_server::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Arc::new(Settings::new().map_err(|e| anyhow!("Failed to load settings: {e}"))?);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level},tower_http={level}").into()
        }))
        .init();

    if let Err(e) = run(&settings).await {
        tracing::error!("Error starting server: {:#}", e);
        return Err(e);
    }

    Ok(())
}

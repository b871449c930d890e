use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use patrika::api;
use patrika::config::Config;
use patrika::logging::configure_logging;
use patrika::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let config = Config::from_env()?;
    info!(
        "Using metadata assistant {} and transform assistant {}",
        config.metadata_assistant_id, config.transform_assistant_id
    );

    let client = config.client();
    let state = AppState {
        config: Arc::new(config),
        client,
    };

    api::serve(state).await
}

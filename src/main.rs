mod domain;
mod error;
mod features;
mod info_server;
mod utils;

use std::sync::Arc;

use anyhow::Result;

use crate::domain::config::ServerConfig;
use crate::features::history::HistoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting HostInfo...");

    let history = Arc::new(HistoryStore::new(ServerConfig::HISTORY_FILE_PATH));
    log::info!("Recording request history to {}", history.path().display());

    if let Err(e) = info_server::run(history).await {
        log::error!("Error starting the server: {}", e);
        return Err(e);
    }

    Ok(())
}

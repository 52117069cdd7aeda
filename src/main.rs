//! ink!jet server
//!
//! Entry point for the smart contract editor.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;

use inkjet::config::AppConfig;
use inkjet::error::ServerError;
use inkjet::{server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().map_err(ServerError::from)?;

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init(&config.logging);

    server::start_server(Arc::new(config)).await?;
    Ok(())
}

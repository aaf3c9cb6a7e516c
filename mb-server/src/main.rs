use mb_server::{build_router, config::Config, logger, state::AppState};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_colored)?;

    info!("Starting mb-server v{}", env!("CARGO_PKG_VERSION"));
    info!("JWT: HS256 authentication enabled");

    // Build application state (verifier and issuer share the secret)
    let state = AppState::new(&config);

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

use fr_server::{AppState, build_router, logger};

use fr_core::SubmissionPipeline;
use fr_mail::SmtpNotifier;
use fr_sheets::GoogleSheetsLedger;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A local .env is optional; real deployments set the environment directly
    let dotenv = dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = fr_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting form-relay v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    let http = reqwest::Client::builder().build()?;
    let pipeline = SubmissionPipeline::new(
        Arc::new(GoogleSheetsLedger::new(http)),
        Arc::new(SmtpNotifier::new()),
    );

    let bind_addr = config.bind_addr();
    let app_state = AppState::new(config, pipeline);

    // Build router
    let app = build_router(app_state)?;

    // Create TCP listener
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
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

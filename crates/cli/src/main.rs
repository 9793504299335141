use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkarr_core::{load_config, validate_config, FilenameGuesser, Guesser, Organizer};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

// Current-thread runtime: each run is single-threaded and sequential by
// design; an external scheduler (or the internal interval loop) provides
// the periodicity.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("linkarr {}", VERSION);

    // Load configuration from the environment (plus optional TOML file)
    let config = load_config().context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("Source root: {}", config.source.display());
    info!("Destination root: {}", config.dest_base.display());
    info!("Recency window: {}h", config.modified_within_hours);

    let guesser: Arc<dyn Guesser> = Arc::new(FilenameGuesser::new());
    info!("Using guesser: {}", guesser.name());

    let organizer = Organizer::new(&config, guesser);

    match config.organizer.run_interval_minutes {
        None => {
            // One shot: the external scheduler owns the periodicity.
            organizer.run_once().await.context("Run failed")?;
        }
        Some(minutes) => {
            info!("Looping with a {} minute interval, ctrl-c to stop", minutes);
            let interval = Duration::from_secs(minutes * 60);
            loop {
                // A failed run in loop mode is logged, not fatal: the next
                // tick is the retry mechanism.
                if let Err(e) = organizer.run_once().await {
                    warn!("Run failed: {}", e);
                }

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = shutdown_signal() => {
                        info!("Shutting down");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `visage serve` command implementation.
//!
//! Starts the static image host, builds the swap client and image store,
//! and runs the Telegram dispatcher until an interrupt or termination
//! signal arrives.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};
use visage_agent::{shutdown, MemorySessionStore, SwapWorkflow};
use visage_config::model::VisageConfig;
use visage_core::error::VisageError;
use visage_imagehost::{ImageStore, StaticHostConfig};
use visage_swap::SwapClient;
use visage_telegram::TelegramChannel;

/// Runs the `visage serve` command.
///
/// Wires config -> image store -> static host -> swap client -> workflow
/// -> Telegram dispatcher. Supports graceful shutdown via signal handlers.
pub async fn run_serve(config: VisageConfig) -> Result<(), VisageError> {
    // Initialize tracing subscriber.
    init_tracing(&config.agent.log_level);

    info!("starting visage serve");

    // Both are required to serve; defaults leave them unset.
    let public_url = config.server.public_url.clone().ok_or_else(|| {
        eprintln!(
            "error: public base URL required. Set server.public_url in visage.toml \
             or the VISAGE_SERVER_PUBLIC_URL environment variable."
        );
        VisageError::Config("server.public_url is required to serve".into())
    })?;

    let telegram = TelegramChannel::new(&config.telegram).map_err(|e| {
        error!(error = %e, "failed to initialize Telegram channel");
        eprintln!(
            "error: Telegram bot token required. Set telegram.bot_token in visage.toml \
             or the VISAGE_TELEGRAM_BOT_TOKEN environment variable."
        );
        e
    })?;

    // Prepare the images directory and its store.
    let images_dir = PathBuf::from(&config.images.dir);
    let store = ImageStore::new(images_dir.clone(), &public_url)?;
    store.ensure_dir().await?;
    info!(dir = %images_dir.display(), "images directory ready");

    // Install signal handler.
    let cancel = shutdown::install_signal_handler();

    // Spawn the static image host.
    let host_config = StaticHostConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        images_dir,
    };
    let server_cancel = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = visage_imagehost::start_server(&host_config, server_cancel).await {
            error!(error = %e, "static image host failed");
        }
    });

    // Build the swap client.
    let swap = SwapClient::new(&config.swap)?;
    info!(
        api_url = config.swap.api_url.as_str(),
        poll_interval_secs = config.swap.poll_interval_secs,
        max_poll_attempts = config.swap.max_poll_attempts,
        "swap client ready"
    );

    // Assemble the workflow and run the dispatcher until cancelled.
    let workflow = Arc::new(SwapWorkflow::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(store),
        Arc::new(swap),
    ));

    telegram.run(workflow, cancel).await;

    info!("visage serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("visage={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

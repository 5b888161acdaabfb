//! Tweetify launcher
//!
//! Launch a pump.fun token from a tweet, watch the live feed of new tokens,
//! or serve both over a small JSON API.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tweetify::api::{self, responses::LaunchResponse, ApiState};
use tweetify::{LauncherConfig, ServiceContainer};

#[derive(Parser)]
#[command(name = "tweetify")]
#[command(about = "Turn a tweet into a pump.fun token")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "tweetify.toml")]
    config: String,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Validate configuration, signer and RPC connectivity, then exit
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Launch a token from a tweet link
    Launch {
        /// Tweet link, e.g. https://x.com/user/status/123
        link: String,
    },
    /// Print the live feed of recently created tokens
    Feed {
        /// Fetch once and exit instead of polling
        #[arg(long)]
        once: bool,
    },
    /// Serve the launch API and live feed
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_missing = !std::path::Path::new(&cli.config).exists();
    let mut config = if config_missing {
        LauncherConfig::default()
    } else {
        LauncherConfig::from_file(&cli.config)?
    };
    config.apply_env();

    if let Some(log_level) = cli.log_level {
        config.monitoring.log_level = log_level;
    }

    init_logging(&config)?;

    if config_missing {
        warn!("Config file not found, using defaults: {}", cli.config);
    }

    config.check()?;
    info!("Configuration validated successfully");

    let container = ServiceContainer::new(config)?;

    if cli.dry_run {
        let signer = container.signer()?;
        info!("Signer authority: {}", signer.pubkey());
        info!("RPC endpoint: {}", container.rpc.url());
        let slot = container
            .rpc
            .get_slot()
            .await
            .map_err(|e| anyhow!("RPC endpoint {} is unreachable: {}", container.rpc.url(), e))?;
        info!("RPC reachable, current slot: {}", slot);
        info!("Dry run mode - configuration is valid, exiting");
        return Ok(());
    }

    match cli.command {
        Some(Command::Launch { link }) => launch(&container, &link).await,
        Some(Command::Feed { once }) => feed(&container, once).await,
        Some(Command::Serve) => serve(&container).await,
        None => Err(anyhow!("No command given; try `tweetify --help`")),
    }
}

async fn launch(container: &ServiceContainer, link: &str) -> Result<()> {
    let signer = container.signer()?;
    info!("Signer authority: {}", signer.pubkey());

    let pipeline = container.pipeline(signer);
    let report = pipeline.launch(link).await;
    let response = LaunchResponse::from(&report);

    println!("{}", serde_json::to_string_pretty(&response)?);

    match report.outcome {
        Ok(_) => Ok(()),
        Err(e) => Err(anyhow!("Launch failed: {}", e)),
    }
}

async fn feed(container: &ServiceContainer, once: bool) -> Result<()> {
    let poller = container.feed_poller();
    let snapshot = poller.snapshot();

    if once {
        if !poller.refresh().await {
            return Err(anyhow!("Failed to fetch live feed"));
        }
        print_feed(&snapshot.read().await.entries);
        return Ok(());
    }

    let mut updates = poller.subscribe();
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = poller.spawn(shutdown_rx);

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("Received shutdown signal");
                break;
            }
            update = updates.recv() => match update {
                Ok(entries) => print_feed(&entries),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Skipped {} feed updates", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    let _ = shutdown_tx.send(());
    if let Err(e) = handle.await {
        error!("Feed poller task error: {}", e);
    }
    Ok(())
}

async fn serve(container: &ServiceContainer) -> Result<()> {
    let signer = container.signer()?;
    info!("Signer authority: {}", signer.pubkey());

    let pipeline = Arc::new(container.pipeline(signer));
    let poller = container.feed_poller();
    let state = ApiState::new(pipeline, poller.snapshot());

    let (shutdown_tx, _) = broadcast::channel(1);
    let poller_handle = poller.spawn(shutdown_tx.subscribe());

    let api_shutdown = shutdown_tx.subscribe();
    let api_config = container.config.api.clone();
    let api_handle = tokio::spawn(async move { api::serve(state, &api_config, api_shutdown).await });

    info!("Launcher started successfully. Press Ctrl+C to shutdown.");
    signal::ctrl_c().await?;
    info!("Received shutdown signal");

    let _ = shutdown_tx.send(());
    match api_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("API server error: {}", e),
        Err(e) => error!("API server task error: {}", e),
    }
    if let Err(e) = poller_handle.await {
        error!("Feed poller task error: {}", e);
    }

    info!("Shutting down Tweetify launcher");
    Ok(())
}

fn print_feed(entries: &[tweetify::core::FeedEntry]) {
    println!("--- Tweetified Feed ({} tokens) ---", entries.len());
    for coin in entries {
        println!("{} @{}  [{}]", coin.name, coin.symbol, coin.mint);
        if let Some(description) = coin.description.as_deref().filter(|d| !d.is_empty()) {
            println!("    {}", description);
        }
        println!(
            "    Market Cap: {}  Total Supply: {}",
            coin.market_cap_display(),
            coin.total_supply_display()
        );
    }
}

fn init_logging(config: &LauncherConfig) -> Result<()> {
    let log_level = config
        .monitoring
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("tweetify={},tower_http=info", log_level).into());

    if config.monitoring.structured_logging {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Ok(())
}

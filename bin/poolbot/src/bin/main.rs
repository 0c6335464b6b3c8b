use balance::BalanceReader;
use clap::Parser;
use client::RpcClient;
use notify::{DiscordNotifier, Notifier};
use poolbot::{
    metrics::{install_prometheus_exporter, Metrics},
    settings::Cli,
    Scheduler,
};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config()?;

    info!("Starting poolbot");
    info!("Loaded config:");
    info!("  RPC URL: {}", config.redacted_rpc_url());
    info!(
        "  Pool: {} ({}) on chain {}",
        config.pool.label, config.pool.address, config.pool.chain_id
    );
    info!("  Channel: {}", config.channel_id);
    info!("  Interval: {}s", config.interval.as_secs());

    if let Some(port) = config.metrics_port {
        install_prometheus_exporter(port)?;
        info!("  Metrics: 0.0.0.0:{}", port);
    }

    let rpc = RpcClient::with_timeout(&config.rpc_url, config.http_timeout)?;
    let monitor = BalanceReader::new(rpc);

    let notifier = DiscordNotifier::new(
        &config.discord_api_url,
        config.bot_token.clone(),
        config.http_timeout,
    )?;

    let session = notifier.connect().await?;
    info!(user_id = %session.user_id, "Logged in as {}!", session.username);

    let scheduler = Scheduler::new(
        monitor,
        notifier,
        config.pool,
        config.channel_id,
        config.interval,
        Metrics::new(),
    );

    if config.once {
        scheduler.run_once().await?;
        return Ok(());
    }

    scheduler
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal");
        })
        .await;

    Ok(())
}

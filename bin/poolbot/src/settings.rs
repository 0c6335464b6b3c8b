//! Startup settings, sourced from flags or the environment.

use clap::Parser;
use config::PoolConfig;
use notify::{ChannelId, DISCORD_API_BASE};
use reqwest::Url;
use std::{fmt, time::Duration};
use thiserror::Error;

const SECS_PER_HOUR: u64 = 60 * 60;

/// Longest accepted post interval: one year.
pub const MAX_INTERVAL_HOURS: u64 = 24 * 365;

/// Command line and environment settings.
#[derive(Parser)]
#[command(name = "poolbot")]
#[command(about = "Post Velodrome CL1-USDC/sDAI pool balances to a Discord channel")]
pub struct Cli {
    /// Optimism JSON-RPC endpoint
    #[arg(long, env = "OPT_RPC_ENDPOINT")]
    pub rpc_url: String,

    /// Destination channel ID
    #[arg(long, env = "CHANNEL_ID")]
    pub channel_id: u64,

    /// Discord bot token
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Hours between scheduled posts
    #[arg(long, env = "POST_INTERVAL_HOURS", default_value_t = 6)]
    pub interval_hours: u64,

    /// Timeout for every outbound HTTP request, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Discord REST API base URL
    #[arg(long, env = "DISCORD_API_URL", default_value = DISCORD_API_BASE)]
    pub discord_api_url: String,

    /// Serve Prometheus metrics on this port
    #[arg(long, env = "METRICS_PORT")]
    pub metrics_port: Option<u16>,

    /// Post once and exit instead of running the schedule
    #[arg(long)]
    pub once: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid RPC URL {url:?}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Bot token is empty")]
    EmptyBotToken,

    #[error("Post interval must be at least one hour")]
    ZeroInterval,

    #[error("Post interval of {0} hours exceeds the maximum of {max}", max = MAX_INTERVAL_HOURS)]
    IntervalTooLarge(u64),

    #[error("HTTP timeout must be at least one second")]
    ZeroTimeout,
}

/// Validated runtime configuration.
#[derive(Clone)]
pub struct Config {
    /// Optimism JSON-RPC endpoint
    pub rpc_url: String,

    /// Destination channel
    pub channel_id: ChannelId,

    /// Discord bot token
    pub bot_token: String,

    /// Time between scheduled posts
    pub interval: Duration,

    /// Per-request HTTP timeout
    pub http_timeout: Duration,

    /// Discord REST API base URL
    pub discord_api_url: String,

    /// Prometheus exporter port, if enabled
    pub metrics_port: Option<u16>,

    /// Single-shot mode
    pub once: bool,

    /// The watched pool
    pub pool: PoolConfig,
}

impl Cli {
    /// Validate settings before anything touches the network.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let url = Url::parse(&self.rpc_url).map_err(|e| ConfigError::InvalidRpcUrl {
            url: self.rpc_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidRpcUrl {
                url: self.rpc_url,
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::EmptyBotToken);
        }
        if self.interval_hours == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.interval_hours > MAX_INTERVAL_HOURS {
            return Err(ConfigError::IntervalTooLarge(self.interval_hours));
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Config {
            rpc_url: self.rpc_url,
            channel_id: ChannelId(self.channel_id),
            bot_token: self.bot_token,
            interval: Duration::from_secs(self.interval_hours * SECS_PER_HOUR),
            http_timeout: Duration::from_secs(self.http_timeout_secs),
            discord_api_url: self.discord_api_url,
            metrics_port: self.metrics_port,
            once: self.once,
            pool: PoolConfig::velodrome_usdc_sdai(),
        })
    }
}

impl Config {
    /// The RPC endpoint reduced to scheme, host and port. Hosted endpoints
    /// carry their API key in the path or query, which must not reach logs.
    pub fn redacted_rpc_url(&self) -> String {
        redact_url(&self.rpc_url)
    }
}

fn redact_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return "<invalid>".to_string();
    };

    let mut redacted = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        redacted.push_str(&format!(":{port}"));
    }
    if url.path() == "/" && url.query().is_none() {
        redacted
    } else {
        format!("{redacted}/<redacted>")
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.redacted_rpc_url())
            .field("channel_id", &self.channel_id)
            .field("bot_token", &"<redacted>")
            .field("interval", &self.interval)
            .field("http_timeout", &self.http_timeout)
            .field("discord_api_url", &self.discord_api_url)
            .field("metrics_port", &self.metrics_port)
            .field("once", &self.once)
            .field("pool", &self.pool)
            .finish()
    }
}

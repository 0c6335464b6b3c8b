pub mod message;
pub mod metrics;
pub mod schedule;
pub mod settings;

use balance::{Balance, BalanceQuery, Monitor, QueryError};
use config::{PoolConfig, TokenConfig};
use notify::{ChannelId, Notifier, NotifyError};
use thiserror::Error;
use tracing::info;

pub use message::{format_message, pool_message};
pub use schedule::Scheduler;

/// Why a notification cycle was skipped.
#[derive(Error, Debug)]
pub enum CycleError {
    /// Destination lookup or message delivery failed
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// A balance could not be read
    #[error("Failed to read {symbol} balance: {source}")]
    Balance {
        symbol: &'static str,
        #[source]
        source: QueryError,
    },
}

impl CycleError {
    /// Short label for logs and metrics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Notify(NotifyError::ChannelNotFound(_)) => "destination_not_found",
            Self::Notify(_) => "notify",
            Self::Balance {
                source: QueryError::Network(_),
                ..
            } => "network",
            Self::Balance {
                source: QueryError::MalformedResponse(_),
                ..
            } => "malformed_response",
        }
    }
}

/// Outcome of a delivered cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// Balances in the pool's report order
    pub balances: [Balance; 2],
    /// The message that was sent
    pub message: String,
}

/// Run one notification cycle: resolve the destination, read both pool
/// balances in order, format them, and send the message.
///
/// Nothing is read when the destination does not resolve, and nothing is sent
/// unless both balances were read.
pub async fn run_cycle<M, N>(
    monitor: &M,
    notifier: &N,
    pool: &PoolConfig,
    channel_id: ChannelId,
) -> Result<CycleReport, CycleError>
where
    M: Monitor,
    N: Notifier,
{
    let channel = notifier.resolve_channel(channel_id).await?;

    let balance_a = read_pool_balance(monitor, pool, pool.token_a).await?;
    let balance_b = read_pool_balance(monitor, pool, pool.token_b).await?;

    let message = pool_message(pool, &balance_a, &balance_b);
    notifier.send(&channel, &message).await?;

    info!(channel = %channel_id, "Message sent successfully");

    Ok(CycleReport {
        balances: [balance_a, balance_b],
        message,
    })
}

async fn read_pool_balance<M>(
    monitor: &M,
    pool: &PoolConfig,
    token: TokenConfig,
) -> Result<Balance, CycleError>
where
    M: Monitor,
{
    let query = BalanceQuery {
        token: token.address,
        holder: pool.address,
        decimals: token.decimals,
    };

    monitor
        .query_balance(query)
        .await
        .map_err(|source| CycleError::Balance {
            symbol: token.symbol,
            source,
        })
}

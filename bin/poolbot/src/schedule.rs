//! Fixed-interval scheduling of notification cycles.
//!
//! One cycle runs immediately when the schedule starts, then one per interval.
//! Cycles run sequentially on a single task, so a slow cycle delays the next
//! tick instead of overlapping it.

use crate::{metrics::Metrics, run_cycle, CycleError, CycleReport};
use balance::Monitor;
use config::PoolConfig;
use notify::{ChannelId, Notifier};
use std::{future::Future, time::Duration};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info};

/// Drives [`run_cycle`] on a fixed interval.
pub struct Scheduler<M, N> {
    monitor: M,
    notifier: N,
    pool: PoolConfig,
    channel_id: ChannelId,
    interval: Duration,
    metrics: Metrics,
}

impl<M, N> Scheduler<M, N>
where
    M: Monitor,
    N: Notifier,
{
    pub const fn new(
        monitor: M,
        notifier: N,
        pool: PoolConfig,
        channel_id: ChannelId,
        interval: Duration,
        metrics: Metrics,
    ) -> Self {
        Self {
            monitor,
            notifier,
            pool,
            channel_id,
            interval,
            metrics,
        }
    }

    /// Run one cycle and record its outcome in metrics.
    pub async fn run_once(&self) -> Result<CycleReport, CycleError> {
        let start = Instant::now();
        let result = run_cycle(&self.monitor, &self.notifier, &self.pool, self.channel_id).await;

        self.metrics.record_cycle(result.is_ok(), start.elapsed());
        match &result {
            Ok(report) => {
                let tokens = self.pool.tokens();
                for (token, balance) in tokens.iter().zip(&report.balances) {
                    self.metrics.set_pool_balance(token.symbol, balance.scaled());
                }
            }
            Err(e) => self.metrics.record_failure(e.kind()),
        }

        result
    }

    /// Run one cycle, logging any failure. Never fails: the schedule always
    /// continues to the next tick.
    ///
    /// Returns whether a message was delivered.
    pub async fn tick(&self) -> bool {
        match self.run_once().await {
            Ok(_) => true,
            Err(e) => {
                error!(kind = e.kind(), "Notification cycle failed: {}", e);
                false
            }
        }
    }

    /// Run a cycle now, then one per interval until `shutdown` completes.
    pub async fn run_until<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            interval_secs = self.interval.as_secs(),
            channel = %self.channel_id,
            "Starting schedule"
        );

        tokio::pin!(shutdown);

        let first_tick = Instant::now().checked_add(self.interval);

        tokio::select! {
            _ = self.tick() => {}
            _ = &mut shutdown => {
                info!("Shutting down");
                return;
            }
        }

        let Some(first_tick) = first_tick else {
            error!(
                interval_secs = self.interval.as_secs(),
                "Interval is too large to schedule, no further posts until shutdown"
            );
            shutdown.await;
            info!("Shutting down");
            return;
        };

        let mut interval = time::interval_at(first_tick, self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick().await;
                }
                _ = &mut shutdown => {
                    info!("Shutting down");
                    return;
                }
            }
        }
    }

    /// The notifier cycles dispatch through.
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The monitor cycles read balances from.
    pub const fn monitor(&self) -> &M {
        &self.monitor
    }
}

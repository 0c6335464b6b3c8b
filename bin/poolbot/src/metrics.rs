//! Prometheus metrics for the bot.
//!
//! All metrics are aggregated in the [`Metrics`] struct for easy tracking and management.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Duration;

/// Aggregated metrics for the bot.
///
/// Metrics are registered with the global metrics registry on creation. Without
/// an installed exporter every call is a no-op.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!("poolbot_cycles_total", "Total number of notification cycles run");
        describe_counter!(
            "poolbot_cycles_success_total",
            "Total number of cycles that delivered a message"
        );
        describe_counter!(
            "poolbot_cycles_failure_total",
            "Total number of failed cycles by error kind"
        );
        describe_histogram!(
            "poolbot_cycle_duration_seconds",
            "Duration of each cycle in seconds"
        );
        describe_gauge!(
            "poolbot_pool_balance",
            "Last observed pool balance in token units, by token symbol"
        );
    }

    /// Record a completed cycle.
    pub fn record_cycle(&self, success: bool, duration: Duration) {
        counter!("poolbot_cycles_total").increment(1);
        histogram!("poolbot_cycle_duration_seconds").record(duration.as_secs_f64());

        if success {
            counter!("poolbot_cycles_success_total").increment(1);
        }
    }

    /// Record why a cycle failed.
    pub fn record_failure(&self, kind: &'static str) {
        counter!("poolbot_cycles_failure_total", "kind" => kind).increment(1);
    }

    /// Set the last observed balance of a token.
    pub fn set_pool_balance(&self, symbol: &'static str, balance: f64) {
        gauge!("poolbot_pool_balance", "token" => symbol).set(balance);
    }
}

/// Install the Prometheus metrics exporter and start the HTTP server.
///
/// Returns an error if the server fails to bind to the specified port.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    Ok(())
}

//! Notification text.

use balance::Balance;
use config::PoolConfig;
use num_format::{Locale, ToFormattedString};

/// Builds the two-line pool summary:
///
/// ```text
/// **{pool_label}**
/// - {balance_a} {label_a}
/// - {balance_b} {label_b}
/// ```
///
/// Balances are truncated toward zero, never rounded, and grouped with commas.
pub fn format_message(
    balance_a: f64,
    balance_b: f64,
    label_a: &str,
    label_b: &str,
    pool_label: &str,
) -> String {
    format!(
        "**{pool_label}**\n- {} {label_a}\n- {} {label_b}",
        format_amount(balance_a),
        format_amount(balance_b),
    )
}

/// Formats the whole-unit part of `value` with thousands separators.
///
/// Negative and NaN inputs render as `0`; values past `u128::MAX` saturate.
pub fn format_amount(value: f64) -> String {
    let whole = value.trunc() as u128;
    whole.to_formatted_string(&Locale::en)
}

/// Formats the message for `pool` from its two token balances, in the pool's
/// report order.
pub fn pool_message(pool: &PoolConfig, balance_a: &Balance, balance_b: &Balance) -> String {
    format_message(
        balance_a.scaled(),
        balance_b.scaled(),
        pool.token_a.symbol,
        pool.token_b.symbol,
        pool.label,
    )
}

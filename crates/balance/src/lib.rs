//! ERC20 balance reads over JSON-RPC.
//!
//! This crate builds the `balanceOf(address)` calldata, sends it through an
//! [`EthCall`](client::EthCall) implementation, decodes the hex quantity the
//! node returns, and scales it by the token's decimals for display.

pub mod abi;
pub mod monitor;

pub use abi::{balance_of_calldata, parse_quantity, scale};
pub use monitor::BalanceReader;

use alloy_primitives::{Address, U256};
use client::ClientError;
use std::future::Future;
use thiserror::Error;

/// A token balance read at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    /// The address holding the balance
    pub holder: Address,
    /// The token contract address
    pub asset: Address,
    /// Raw on-chain amount
    pub amount: U256,
    /// Decimals used to scale `amount` for display
    pub decimals: u8,
}

impl Balance {
    /// Human-scaled amount, `amount / 10^decimals`.
    pub fn scaled(&self) -> f64 {
        scale(self.amount, self.decimals)
    }
}

/// An ERC20 balance to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceQuery {
    /// Token contract address
    pub token: Address,
    /// Holder address
    pub holder: Address,
    /// Token decimals
    pub decimals: u8,
}

#[derive(Error, Debug)]
pub enum QueryError {
    /// The RPC endpoint could not be reached or rejected the request
    #[error("RPC endpoint unreachable: {0}")]
    Network(#[source] ClientError),

    /// The endpoint answered, but not with a usable balance
    #[error("Malformed eth_call response: {0}")]
    MalformedResponse(String),
}

impl From<ClientError> for QueryError {
    fn from(err: ClientError) -> Self {
        if err.is_network() {
            Self::Network(err)
        } else {
            Self::MalformedResponse(err.to_string())
        }
    }
}

/// Trait for reading token balances.
pub trait Monitor: Send + Sync {
    /// Query a single balance.
    fn query_balance(
        &self,
        query: BalanceQuery,
    ) -> impl Future<Output = Result<Balance, QueryError>> + Send;
}

//! Pool and token constants.
//!
//! The bot watches exactly one pool; its addresses and token decimals are
//! fixed at compile time.

use alloy_primitives::{address, Address};

/// Optimism mainnet chain ID.
pub const OPTIMISM_CHAIN_ID: u64 = 10;

/// A token whose pool balance is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenConfig {
    /// ERC20 contract address
    pub address: Address,
    /// On-chain decimals, used only to scale the raw balance for display
    pub decimals: u8,
    /// Display symbol
    pub symbol: &'static str,
}

impl TokenConfig {
    /// USDC on Optimism.
    pub const fn usdc() -> Self {
        Self {
            // https://optimistic.etherscan.io/address/0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85
            address: address!("0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85"),
            decimals: 6,
            symbol: "USDC",
        }
    }

    /// sDAI on Optimism.
    pub const fn sdai() -> Self {
        Self {
            // https://optimistic.etherscan.io/address/0x2218a117083f5B482B0bB821d27056Ba9c04b1D3
            address: address!("0x2218a117083f5B482B0bB821d27056Ba9c04b1D3"),
            decimals: 18,
            symbol: "sDAI",
        }
    }
}

/// The watched liquidity pool and the two tokens it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Chain ID the pool lives on
    pub chain_id: u64,
    /// Pool contract address (the balance holder)
    pub address: Address,
    /// Header line of the notification
    pub label: &'static str,
    /// Token reported first
    pub token_a: TokenConfig,
    /// Token reported second
    pub token_b: TokenConfig,
}

impl PoolConfig {
    /// Velodrome CL1-USDC/sDAI pool on Optimism.
    pub const fn velodrome_usdc_sdai() -> Self {
        Self {
            chain_id: OPTIMISM_CHAIN_ID,
            // https://optimistic.etherscan.io/address/0x131525f3FA23d65DC2B1EB8B6483a28c43B06916
            address: address!("0x131525f3FA23d65DC2B1EB8B6483a28c43B06916"),
            label: "Velodrome CL1-USDC/sDAI pool",
            token_a: TokenConfig::sdai(),
            token_b: TokenConfig::usdc(),
        }
    }

    /// Both tokens in report order.
    pub const fn tokens(&self) -> [TokenConfig; 2] {
        [self.token_a, self.token_b]
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::velodrome_usdc_sdai()
    }
}

//! Configuration types for the pool balance bot.
//!
//! This crate provides:
//! - The watched pool and its two token contracts on Optimism
//! - Token decimals and display symbols used to scale balances

pub mod pool;

pub use pool::{PoolConfig, TokenConfig, OPTIMISM_CHAIN_ID};

//! JSON-RPC access to an Ethereum-compatible node.
//!
//! The bot only ever issues read-only `eth_call` requests, so this crate
//! exposes a small HTTP JSON-RPC client and the [`EthCall`] seam the balance
//! reader is generic over.

mod rpc;
#[cfg(test)]
mod test_utils;

use alloy_primitives::{Address, Bytes};
pub use rpc::{CallRequest, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcClient};
use std::future::Future;
use thiserror::Error;

/// Block tag every call is evaluated against.
pub const LATEST_BLOCK: &str = "latest";

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success HTTP status
    #[error("RPC endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a JSON-RPC response
    #[error("Invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    /// Node returned a JSON-RPC error object
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response carried neither `result` nor `error`
    #[error("JSON-RPC response has no result")]
    MissingResult,
}

impl ClientError {
    /// Whether the endpoint could not be reached or refused the request,
    /// as opposed to answering with something unexpected.
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

/// Read-only contract call against the latest block.
pub trait EthCall: Send + Sync {
    /// Execute `eth_call` with `{to, data}` and return the raw hex `result`.
    fn eth_call(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;
}

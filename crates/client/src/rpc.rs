//! HTTP JSON-RPC 2.0 client.
//!
//! Requests are POSTed as a single JSON object; responses are decoded into
//! [`JsonRpcResponse`] and reduced to either the `result` payload or a
//! [`ClientError`].

use crate::{ClientError, EthCall, LATEST_BLOCK};
use alloy_primitives::{Address, Bytes};
use reqwest::Url;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Constant request id; requests are never pipelined.
const REQUEST_ID: u32 = 1;

/// JSON-RPC client bound to a single HTTP endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    url: Url,
}

impl RpcClient {
    /// Creates a client with reqwest's default settings.
    pub fn new(rpc_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), rpc_url)
    }

    /// Creates a client whose requests fail after `timeout`.
    pub fn with_timeout(rpc_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(client, rpc_url)
    }

    /// Creates a client with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, rpc_url: &str) -> Result<Self, ClientError> {
        let url = rpc_url
            .parse()
            .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;

        Ok(Self { client, url })
    }

    /// The endpoint this client talks to.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Sends one JSON-RPC request and returns its decoded `result`.
    pub async fn request<P, R>(&self, method: &'static str, params: P) -> Result<R, ClientError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: REQUEST_ID,
        };

        let response = self.client.post(self.url.clone()).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ClientError::Status { status, body });
        }

        let body = response.text().await?;
        let rpc_response: JsonRpcResponse<R> = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}: {body}")))?;

        rpc_response.into_result()
    }
}

impl EthCall for RpcClient {
    async fn eth_call(&self, to: Address, data: Bytes) -> Result<String, ClientError> {
        debug!(%to, data = %data, "eth_call");

        self.request("eth_call", (CallRequest { to, data }, LATEST_BLOCK))
            .await
    }
}

/// The `{to, data}` call object of `eth_call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub to: Address,
    pub data: Bytes,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: T,
    pub id: u32,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl<T> JsonRpcResponse<T> {
    /// An `error` object wins over any `result` sent alongside it.
    pub fn into_result(self) -> Result<T, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        self.result.ok_or(ClientError::MissingResult)
    }
}

use crate::{abi, Balance, BalanceQuery, Monitor, QueryError};
use alloy_primitives::Address;
use client::EthCall;
use tracing::debug;

/// Reads ERC20 balances with raw `eth_call` requests.
pub struct BalanceReader<C> {
    client: C,
}

impl<C> BalanceReader<C>
where
    C: EthCall,
{
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Read `owner`'s balance of `token`, scaled by `decimals` on demand.
    ///
    /// Issues exactly one `eth_call`. Transport failures, JSON-RPC errors and
    /// unparsable results are returned as errors, never as a zero balance.
    pub async fn read_balance(
        &self,
        token: Address,
        owner: Address,
        decimals: u8,
    ) -> Result<Balance, QueryError> {
        debug!("Querying erc20 {} balance: address={}", token, owner);

        let data = abi::balance_of_calldata(owner);
        let result = self.client.eth_call(token, data).await?;
        let amount = abi::parse_quantity(&result)?;

        debug!(%token, %amount, decimals, "Balance read");

        Ok(Balance {
            holder: owner,
            asset: token,
            amount,
            decimals,
        })
    }

    /// The underlying call client.
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C> Monitor for BalanceReader<C>
where
    C: EthCall,
{
    async fn query_balance(&self, query: BalanceQuery) -> Result<Balance, QueryError> {
        self.read_balance(query.token, query.holder, query.decimals)
            .await
    }
}

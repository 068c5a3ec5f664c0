//! The JSON-RPC client for a Sui fullnode.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use sui_crypto::Signature;
use sui_primitives::encoding;
use sui_types::{ObjectID, SuiAddress};

use crate::rpc::{RpcError, RpcRequest, RpcResponse};
use crate::types::{
    CoinPage, DelegatedStake, DryRunTransactionBlockResponse, ExecuteTransactionRequestType,
    SuiTransactionBlockResponse,
};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Fullnode JSON-RPC endpoint, e.g. `https://fullnode.testnet.sui.io`.
    pub rpc_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            rpc_url: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// An HTTP JSON-RPC client.
///
/// Cheap to clone is not a goal here; share one instance. All methods
/// are plain request/response — the transaction core never calls back
/// into this type.
#[derive(Debug)]
pub struct SuiClient {
    /// Client configuration.
    config: ClientConfig,
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Monotonic request id counter.
    next_id: AtomicU64,
}

impl SuiClient {
    /// Create a client from a configuration.
    ///
    /// # Arguments
    /// * `config` - Endpoint and timeout settings.
    ///
    /// # Returns
    /// The client, or a transport error if the HTTP stack fails to
    /// initialize.
    pub fn new(config: ClientConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(SuiClient {
            config,
            http,
            next_id: AtomicU64::new(0),
        })
    }

    /// Create a client for an endpoint URL with default settings.
    ///
    /// # Arguments
    /// * `rpc_url` - The fullnode endpoint; a trailing slash is trimmed.
    ///
    /// # Returns
    /// The client, or a transport error.
    pub fn dial(rpc_url: &str) -> Result<Self, RpcError> {
        Self::new(ClientConfig {
            rpc_url: rpc_url.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    /// Perform a JSON-RPC call and decode the result.
    ///
    /// # Arguments
    /// * `method` - The RPC method name.
    /// * `params` - Positional parameters as a JSON array.
    ///
    /// # Returns
    /// The decoded result, or a typed transport/RPC error.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let request = RpcRequest::new(id, method, params);
        debug!(method, id, "sending JSON-RPC request");

        let response = self
            .http
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(method, status = status.as_u16(), "request failed");
            return Err(RpcError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let message: RpcResponse = response.json().await?;
        if let Some(error) = message.error {
            debug!(method, code = error.code, "server returned an error");
            return Err(error.into());
        }
        let result = message.result.ok_or(RpcError::NoResult)?;
        Ok(serde_json::from_value(result)?)
    }

    /// List coins owned by an address.
    ///
    /// # Arguments
    /// * `owner` - The owning address.
    /// * `coin_type` - Coin type filter; `None` means `0x2::sui::SUI`.
    /// * `cursor` - Resume cursor from a previous page.
    /// * `limit` - Maximum coins per page; `None` for the server default.
    ///
    /// # Returns
    /// One page of coins.
    pub async fn get_coins(
        &self,
        owner: SuiAddress,
        coin_type: Option<&str>,
        cursor: Option<ObjectID>,
        limit: Option<usize>,
    ) -> Result<CoinPage, RpcError> {
        self.call("suix_getCoins", json!([owner, coin_type, cursor, limit]))
            .await
    }

    /// Fetch the current reference gas price.
    ///
    /// # Returns
    /// The price in MIST per gas unit.
    pub async fn get_reference_gas_price(&self) -> Result<u64, RpcError> {
        let price: crate::types::BigInt =
            self.call("suix_getReferenceGasPrice", json!([])).await?;
        Ok(price.value())
    }

    /// Simulate a transaction without submitting it.
    ///
    /// # Arguments
    /// * `tx_bytes` - Canonical `TransactionData` bytes.
    ///
    /// # Returns
    /// The simulated effects.
    pub async fn dry_run_transaction_block(
        &self,
        tx_bytes: &[u8],
    ) -> Result<DryRunTransactionBlockResponse, RpcError> {
        self.call(
            "sui_dryRunTransactionBlock",
            json!([encoding::encode_base64(tx_bytes)]),
        )
        .await
    }

    /// Submit a signed transaction.
    ///
    /// # Arguments
    /// * `tx_bytes` - Canonical `TransactionData` bytes.
    /// * `signatures` - One signature blob per required signer.
    /// * `request_type` - How long the node should wait before answering.
    ///
    /// # Returns
    /// The execution response.
    pub async fn execute_transaction_block(
        &self,
        tx_bytes: &[u8],
        signatures: &[Signature],
        request_type: ExecuteTransactionRequestType,
    ) -> Result<SuiTransactionBlockResponse, RpcError> {
        let encoded_signatures: Vec<String> =
            signatures.iter().map(|s| s.to_base64()).collect();
        self.call(
            "sui_executeTransactionBlock",
            json!([
                encoding::encode_base64(tx_bytes),
                encoded_signatures,
                serde_json::Value::Null,
                request_type,
            ]),
        )
        .await
    }

    /// List the delegated stakes an address holds.
    ///
    /// # Arguments
    /// * `owner` - The staking address.
    ///
    /// # Returns
    /// One entry per validator staked with.
    pub async fn get_stakes(
        &self,
        owner: SuiAddress,
    ) -> Result<Vec<DelegatedStake>, RpcError> {
        self.call("suix_getStakes", json!([owner])).await
    }
}

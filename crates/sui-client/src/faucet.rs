//! Faucet helper for funding development accounts.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use sui_types::SuiAddress;

/// Devnet faucet endpoint.
pub const DEVNET_FAUCET_URL: &str = "https://faucet.devnet.sui.io/gas";

/// Testnet faucet endpoint.
pub const TESTNET_FAUCET_URL: &str = "https://faucet.testnet.sui.io/gas";

/// Errors from the faucet helper.
#[derive(Debug, thiserror::Error)]
pub enum FaucetError {
    /// The HTTP request failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The faucet answered with a non-success HTTP status.
    #[error("faucet returned HTTP status {0}")]
    Status(u16),

    /// The faucet reported an application-level error.
    #[error("faucet error: {0}")]
    Api(String),

    /// The faucet reported success but transferred nothing.
    #[error("no gas objects transferred")]
    NoTransfer,
}

#[derive(Debug, Deserialize)]
struct FaucetResponse {
    #[serde(default, rename = "transferredGasObjects")]
    transferred_gas_objects: Vec<TransferredGasObject>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransferredGasObject {
    #[serde(rename = "transferTxDigest")]
    transfer_tx_digest: String,
}

/// Request faucet funds for an address.
///
/// # Arguments
/// * `address` - The recipient address.
/// * `faucet_url` - One of the endpoint constants, or a custom faucet.
///
/// # Returns
/// The digest of the funding transaction.
pub async fn faucet_fund_account(
    address: &SuiAddress,
    faucet_url: &str,
) -> Result<String, FaucetError> {
    let body = json!({
        "FixedAmountRequest": { "recipient": address.to_hex_literal() }
    });
    debug!(faucet_url, "requesting faucet funds");

    let response = reqwest::Client::new()
        .post(faucet_url)
        .json(&body)
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 200 && status != 201 {
        return Err(FaucetError::Status(status));
    }

    let parsed: FaucetResponse = response.json().await?;
    if let Some(error) = parsed.error {
        if !error.trim().is_empty() {
            return Err(FaucetError::Api(error));
        }
    }
    parsed
        .transferred_gas_objects
        .into_iter()
        .next()
        .map(|obj| obj.transfer_tx_digest)
        .ok_or(FaucetError::NoTransfer)
}

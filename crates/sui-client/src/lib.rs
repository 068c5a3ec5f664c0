#![deny(missing_docs)]

//! # sui-client
//!
//! JSON-RPC transport for the Sui ledger, plus the client-side helpers
//! that sit at the transport boundary: deterministic coin selection, the
//! faucet helper, and stake transaction builders.
//!
//! The transaction-construction core never performs I/O; this crate
//! fetches the state it needs (coins, gas price) before building and
//! submits bytes plus signatures after signing.
//!
//! # Example
//!
//! ```no_run
//! use sui_client::{ClientConfig, SuiClient};
//!
//! # async fn example() -> Result<(), sui_client::RpcError> {
//! let client = SuiClient::new(ClientConfig {
//!     rpc_url: "https://fullnode.testnet.sui.io".to_string(),
//!     ..Default::default()
//! })?;
//! let price = client.get_reference_gas_price().await?;
//! # let _ = price;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod coin;
pub mod faucet;
pub mod rpc;
pub mod stake;
pub mod types;


pub use client::{ClientConfig, SuiClient};
pub use coin::{pick_coins, CoinSelectionError, PickedCoins};
pub use faucet::{faucet_fund_account, FaucetError, DEVNET_FAUCET_URL, TESTNET_FAUCET_URL};
pub use rpc::RpcError;
pub use types::{
    BigInt, Coin, CoinPage, DelegatedStake, DryRunTransactionBlockResponse,
    ExecuteTransactionRequestType, ExecutionStatus, GasCostSummary, Page, Stake,
    SuiTransactionBlockResponse, TransactionBytes, TransactionEffects,
};

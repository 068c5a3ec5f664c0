//! RPC-facing data types.
//!
//! These mirror the JSON shapes the fullnode serves; u64 quantities
//! travel as decimal strings, object ids as full-width hex, digests as
//! base58.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sui_primitives::{encoding, PrimitivesError};
use sui_types::{ObjectDigest, ObjectID, ObjectRef, TransactionDigest};

/// A u64 carried as a decimal string in JSON.
///
/// The RPC layer encodes every quantity this way so JavaScript clients
/// never hit the 2^53 precision cliff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(
    /// The wrapped value.
    pub u64,
);

impl BigInt {
    /// The wrapped value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BigInt {
    fn from(v: u64) -> Self {
        BigInt(v)
    }
}

impl From<BigInt> for u64 {
    fn from(v: BigInt) -> Self {
        v.0
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u64>()
            .map(BigInt)
            .map_err(serde::de::Error::custom)
    }
}

/// One page of a cursored listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T, C> {
    /// The page contents.
    pub data: Vec<T>,
    /// Cursor to pass for the next page, if any.
    #[serde(default)]
    pub next_cursor: Option<C>,
    /// Whether further pages exist.
    #[serde(default)]
    pub has_next_page: bool,
}

/// A coin object owned by an address, as reported by the fullnode.
///
/// An immutable snapshot: the selector never mutates these.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// The coin's Move type, e.g. `0x2::sui::SUI`.
    pub coin_type: String,
    /// The coin object's id.
    pub coin_object_id: ObjectID,
    /// The coin object's current version.
    pub version: BigInt,
    /// Digest of that version.
    pub digest: ObjectDigest,
    /// Balance in the coin's smallest unit.
    pub balance: BigInt,
    /// The transaction that last touched this coin.
    pub previous_transaction: TransactionDigest,
}

impl Coin {
    /// The exact object reference for spending this coin.
    ///
    /// # Returns
    /// An `ObjectRef` for the snapshot version.
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.coin_object_id, self.version.value(), self.digest)
    }
}

/// A page of coins.
pub type CoinPage = Page<Coin, ObjectID>;

/// Transaction bytes returned by the fullnode's unsafe builder methods.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBytes {
    /// Base64 of the canonical `TransactionData` bytes.
    pub tx_bytes: String,
}

impl TransactionBytes {
    /// Decode the canonical transaction bytes.
    ///
    /// # Returns
    /// The raw bytes, or an error for ill-formed base64.
    pub fn to_vec(&self) -> Result<Vec<u8>, PrimitivesError> {
        encoding::decode_base64(&self.tx_bytes)
    }
}

/// Execution outcome of a (dry-)run transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    /// `"success"` or `"failure"`.
    pub status: String,
    /// Failure description, when present.
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionStatus {
    /// Whether execution succeeded.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Gas charged for one transaction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    /// Cost of computation.
    pub computation_cost: BigInt,
    /// Cost of storing created and mutated objects.
    pub storage_cost: BigInt,
    /// Rebate for deleted or resized objects.
    pub storage_rebate: BigInt,
    /// Storage fee withheld from the rebate.
    #[serde(default)]
    pub non_refundable_storage_fee: BigInt,
}

impl GasCostSummary {
    /// Net gas fee: computation + storage - rebate.
    ///
    /// # Returns
    /// The net fee; negative when rebates exceed charges.
    pub fn gas_fee(&self) -> i128 {
        self.computation_cost.value() as i128 + self.storage_cost.value() as i128
            - self.storage_rebate.value() as i128
    }
}

/// The effects summary of an executed or simulated transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    /// Execution outcome.
    pub status: ExecutionStatus,
    /// Gas charged.
    pub gas_used: GasCostSummary,
    /// Digest of the executed transaction, when reported.
    #[serde(default)]
    pub transaction_digest: Option<TransactionDigest>,
}

/// Response to `sui_dryRunTransactionBlock`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunTransactionBlockResponse {
    /// Simulated effects.
    pub effects: TransactionEffects,
}

/// Response to `sui_executeTransactionBlock`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiTransactionBlockResponse {
    /// Digest of the submitted transaction.
    pub digest: TransactionDigest,
    /// Effects, when requested in the response options.
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    /// Whether the node executed locally before responding.
    #[serde(default)]
    pub confirmed_local_execution: Option<bool>,
}

/// How long `sui_executeTransactionBlock` should wait before answering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteTransactionRequestType {
    /// Return once an effects certificate exists.
    WaitForEffectsCert,
    /// Return after local execution.
    WaitForLocalExecution,
}

/// One stake entry within a delegation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stake {
    /// Id of the `StakedSui` receipt object.
    pub staked_sui_id: ObjectID,
    /// Epoch the stake was requested in.
    pub stake_request_epoch: BigInt,
    /// Epoch the stake became active in.
    pub stake_active_epoch: BigInt,
    /// Principal amount in MIST.
    pub principal: BigInt,
    /// `"Active"`, `"Pending"`, or `"Unstaked"`.
    pub status: String,
    /// Reward estimate, present for active stakes.
    #[serde(default)]
    pub estimated_reward: Option<BigInt>,
}

/// All stakes an address holds with one validator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedStake {
    /// The validator staked with.
    pub validator_address: sui_types::SuiAddress,
    /// The validator's staking pool object.
    pub staking_pool: ObjectID,
    /// The individual stake entries.
    pub stakes: Vec<Stake>,
}

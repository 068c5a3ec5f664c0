//! Names used by the staking and governance entry points.

use crate::identifier::Identifier;

/// Module exposing the validator staking entry points.
pub const SUI_SYSTEM_MODULE_NAME: &str = "sui_system";

/// Module defining the staking pool and `StakedSui` receipts.
pub const STAKING_POOL_MODULE_NAME: &str = "staking_pool";

/// Struct representing a stake receipt.
pub const STAKED_SUI_STRUCT_NAME: &str = "StakedSui";

/// Stake a single coin with a validator.
pub const ADD_STAKE_FUN_NAME: &str = "request_add_stake";

/// Stake several coins with a validator in one call.
pub const ADD_STAKE_MUL_COIN_FUN_NAME: &str = "request_add_stake_mul_coin";

/// Withdraw a stake receipt.
pub const WITHDRAW_STAKE_FUN_NAME: &str = "request_withdraw_stake";

/// Build the `sui_system` module identifier.
pub fn sui_system_module() -> Identifier {
    Identifier::new(SUI_SYSTEM_MODULE_NAME).expect("static identifier")
}

/// Build an identifier for one of the governance names above.
///
/// # Arguments
/// * `name` - A constant from this module.
///
/// # Returns
/// The validated identifier.
pub fn governance_ident(name: &str) -> Identifier {
    Identifier::new(name).expect("static identifier")
}

//! Stake transaction builders.
//!
//! Pure functions expanding the governance calls into programmable
//! transactions; no I/O happens here. The gas price and the coin set
//! come from the transport before these run.

use sui_types::framework;
use sui_types::governance;
use sui_types::{
    Argument, Command, ObjectArg, ObjectRef, ProgrammableMoveCall,
    ProgrammableTransactionBuilder, SuiAddress, TransactionData, TypesError,
};

/// Build a `request_add_stake` transaction.
///
/// Splits `amount` off the gas coin, then stakes the split result with
/// `validator` through the mutable system state object. The supplied
/// coins fund gas (and, through gas smashing, the stake itself).
///
/// # Arguments
/// * `signer` - The staking address.
/// * `gas_coins` - Coins paying for gas.
/// * `amount` - MIST to stake.
/// * `validator` - The validator to stake with.
/// * `gas_budget` - Ceiling on gas spend.
/// * `gas_price` - Declared gas price.
///
/// # Returns
/// The unsigned transaction envelope.
pub fn build_add_stake(
    signer: SuiAddress,
    gas_coins: Vec<ObjectRef>,
    amount: u64,
    validator: SuiAddress,
    gas_budget: u64,
    gas_price: u64,
) -> Result<TransactionData, TypesError> {
    let mut ptb = ProgrammableTransactionBuilder::new();
    let amount_arg = ptb.pure(&amount)?;
    let system_arg = ptb.obj(framework::sui_system_state_mut())?;
    let staked_coin = ptb.command(Command::SplitCoins(Argument::GasCoin, vec![amount_arg]))?;
    let validator_arg = ptb.pure(&validator)?;
    ptb.command(Command::MoveCall(ProgrammableMoveCall {
        package: framework::SUI_SYSTEM_ADDRESS,
        module: governance::sui_system_module(),
        function: governance::governance_ident(governance::ADD_STAKE_FUN_NAME),
        type_arguments: vec![],
        arguments: vec![system_arg, staked_coin, validator_arg],
    }))?;
    Ok(TransactionData::new_programmable(
        signer,
        gas_coins,
        ptb.finish(),
        gas_budget,
        gas_price,
    ))
}

/// Build a `request_withdraw_stake` transaction.
///
/// # Arguments
/// * `signer` - The staking address.
/// * `staked_sui` - The `StakedSui` receipt object to withdraw.
/// * `gas_coins` - Coins paying for gas.
/// * `gas_budget` - Ceiling on gas spend.
/// * `gas_price` - Declared gas price.
///
/// # Returns
/// The unsigned transaction envelope.
pub fn build_withdraw_stake(
    signer: SuiAddress,
    staked_sui: ObjectRef,
    gas_coins: Vec<ObjectRef>,
    gas_budget: u64,
    gas_price: u64,
) -> Result<TransactionData, TypesError> {
    let mut ptb = ProgrammableTransactionBuilder::new();
    let system_arg = ptb.obj(framework::sui_system_state_mut())?;
    let staked_arg = ptb.obj(ObjectArg::ImmOrOwnedObject(staked_sui))?;
    ptb.command(Command::MoveCall(ProgrammableMoveCall {
        package: framework::SUI_SYSTEM_ADDRESS,
        module: governance::sui_system_module(),
        function: governance::governance_ident(governance::WITHDRAW_STAKE_FUN_NAME),
        type_arguments: vec![],
        arguments: vec![system_arg, staked_arg],
    }))?;
    Ok(TransactionData::new_programmable(
        signer,
        gas_coins,
        ptb.finish(),
        gas_budget,
        gas_price,
    ))
}

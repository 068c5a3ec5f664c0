//! Tests for the sui-types crate.
//!
//! Covers the recipe expansions, the wire layout of full transaction
//! envelopes, and byte-for-byte agreement with an independently
//! hand-rolled reference encoding of the transfer vector.

use sui_primitives::bcs::{from_bytes, to_bytes};

use crate::address::SuiAddress;
use crate::builder::ProgrammableTransactionBuilder;
use crate::digest::Digest;
use crate::framework;
use crate::governance;
use crate::identifier::Identifier;
use crate::object::{ObjectArg, ObjectRef};
use crate::transaction::{
    Argument, CallArg, Command, TransactionData, TransactionExpiration, TransactionKind,
};

const SENDER: &str = "0xd77955e670f42c1bc5e94b9e68e5fe9bdbed9134d784f2a14dfe5fc1b24b5d9f";
const GAS_OBJECT: &str = "0x13c1c3d0e15b4039cec4291c75b77c972c10c8e8e70ab4ca174cf336917cb4db";
const GAS_DIGEST: &str = "HvbE2UZny6cP4KukaXetmj4jjpKTDTjVo23XEcu7VgSn";

fn addr(s: &str) -> SuiAddress {
    SuiAddress::from_hex(s).unwrap()
}

fn gas_ref() -> ObjectRef {
    ObjectRef::new(
        addr(GAS_OBJECT),
        14924029,
        Digest::from_base58(GAS_DIGEST).unwrap(),
    )
}

// -----------------------------------------------------------------------
// Recipe shapes
// -----------------------------------------------------------------------

#[test]
fn transfer_sui_with_amount_splits_then_transfers() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_sui(addr(SENDER), Some(100_000)).unwrap();
    let pt = ptb.finish();

    assert_eq!(pt.inputs.len(), 2);
    assert_eq!(pt.commands.len(), 2);
    match &pt.commands[0] {
        Command::SplitCoins(coin, amounts) => {
            assert_eq!(*coin, Argument::GasCoin);
            assert_eq!(amounts.as_slice(), &[Argument::Input(1)]);
        }
        other => panic!("expected SplitCoins, got {:?}", other),
    }
    match &pt.commands[1] {
        Command::TransferObjects(objects, recipient) => {
            assert_eq!(objects.as_slice(), &[Argument::Result(0)]);
            assert_eq!(*recipient, Argument::Input(0));
        }
        other => panic!("expected TransferObjects, got {:?}", other),
    }
}

#[test]
fn transfer_sui_without_amount_sends_gas_coin_directly() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_sui(addr(SENDER), None).unwrap();
    let pt = ptb.finish();

    assert_eq!(pt.inputs.len(), 1);
    assert_eq!(pt.commands.len(), 1);
    match &pt.commands[0] {
        Command::TransferObjects(objects, _) => {
            assert_eq!(objects.as_slice(), &[Argument::GasCoin]);
        }
        other => panic!("expected TransferObjects, got {:?}", other),
    }
}

#[test]
fn transfer_object_registers_recipient_first() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_object(addr(SENDER), &[gas_ref()]).unwrap();
    let pt = ptb.finish();

    assert_eq!(pt.inputs.len(), 2);
    assert!(matches!(pt.inputs[0], CallArg::Pure(_)));
    assert!(matches!(
        pt.inputs[1],
        CallArg::Object(ObjectArg::ImmOrOwnedObject(_))
    ));
    match &pt.commands[0] {
        Command::TransferObjects(objects, recipient) => {
            assert_eq!(objects.as_slice(), &[Argument::Input(1)]);
            assert_eq!(*recipient, Argument::Input(0));
        }
        other => panic!("expected TransferObjects, got {:?}", other),
    }
}

#[test]
fn pay_expands_to_one_split_and_one_transfer_per_recipient() {
    let recipient = addr("0x123456");
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.pay(&[gas_ref()], &[recipient, recipient], &[10, 10])
        .unwrap();
    let pt = ptb.finish();

    // Inputs: the coin, the deduped amount, the deduped recipient.
    assert_eq!(pt.inputs.len(), 3);
    assert_eq!(pt.commands.len(), 3);
    match &pt.commands[0] {
        Command::SplitCoins(coin, amounts) => {
            assert_eq!(*coin, Argument::Input(0));
            // Two logical results, even though the amount input is shared.
            assert_eq!(
                amounts.as_slice(),
                &[Argument::Input(1), Argument::Input(1)]
            );
        }
        other => panic!("expected SplitCoins, got {:?}", other),
    }
    for (position, command) in pt.commands[1..].iter().enumerate() {
        match command {
            Command::TransferObjects(objects, recipient_arg) => {
                assert_eq!(
                    objects.as_slice(),
                    &[Argument::NestedResult(0, position as u16)]
                );
                assert_eq!(*recipient_arg, Argument::Input(2));
            }
            other => panic!("expected TransferObjects, got {:?}", other),
        }
    }
}

#[test]
fn pay_with_extra_coins_merges_them_first() {
    let recipient = addr("0x123456");
    let mut coin2 = gas_ref();
    coin2.object_id = addr("0x42");
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.pay(&[gas_ref(), coin2], &[recipient], &[10]).unwrap();
    let pt = ptb.finish();

    match &pt.commands[0] {
        Command::MergeCoins(dest, sources) => {
            assert_eq!(*dest, Argument::Input(0));
            assert_eq!(sources.as_slice(), &[Argument::Input(1)]);
        }
        other => panic!("expected MergeCoins, got {:?}", other),
    }
    assert!(matches!(pt.commands[1], Command::SplitCoins(_, _)));
}

#[test]
fn pay_all_sui_merges_into_first_then_transfers() {
    let recipient = addr(SENDER);
    let mut coin2 = gas_ref();
    coin2.object_id = addr("0x42");
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.pay_all_sui(&[gas_ref(), coin2], recipient).unwrap();
    let pt = ptb.finish();

    assert_eq!(pt.commands.len(), 2);
    match &pt.commands[0] {
        Command::MergeCoins(dest, sources) => {
            assert_eq!(*dest, Argument::Input(0));
            assert_eq!(sources.as_slice(), &[Argument::Input(1)]);
        }
        other => panic!("expected MergeCoins, got {:?}", other),
    }
    match &pt.commands[1] {
        Command::TransferObjects(objects, _) => {
            assert_eq!(objects.as_slice(), &[Argument::Input(0)]);
        }
        other => panic!("expected TransferObjects, got {:?}", other),
    }
}

#[test]
fn pay_all_sui_single_coin_skips_the_merge() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.pay_all_sui(&[gas_ref()], addr(SENDER)).unwrap();
    let pt = ptb.finish();
    assert_eq!(pt.commands.len(), 1);
    assert!(matches!(pt.commands[0], Command::TransferObjects(_, _)));
}

#[test]
fn move_call_preserves_argument_order() {
    let validator = addr("0x44");
    let mut ptb = ProgrammableTransactionBuilder::new();
    let amount_arg = ptb.pure(&framework::MIST_PER_SUI).unwrap();
    let staked = ptb
        .command(Command::SplitCoins(Argument::GasCoin, vec![amount_arg]))
        .unwrap();
    let system_arg = ptb.obj(framework::sui_system_state_mut()).unwrap();
    let validator_arg = ptb.pure(&validator).unwrap();
    ptb.command(Command::MoveCall(crate::transaction::ProgrammableMoveCall {
        package: framework::SUI_SYSTEM_ADDRESS,
        module: governance::sui_system_module(),
        function: governance::governance_ident(governance::ADD_STAKE_FUN_NAME),
        type_arguments: vec![],
        arguments: vec![system_arg, staked, validator_arg],
    }))
    .unwrap();
    let pt = ptb.finish();

    assert_eq!(pt.commands.len(), 2);
    match &pt.commands[1] {
        Command::MoveCall(call) => {
            assert_eq!(call.module.as_str(), "sui_system");
            assert_eq!(call.function.as_str(), "request_add_stake");
            assert_eq!(
                call.arguments.as_slice(),
                &[system_arg, staked, validator_arg]
            );
        }
        other => panic!("expected MoveCall, got {:?}", other),
    }
}

#[test]
fn move_call_recipe_registers_inputs_in_order() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    let coin_arg = CallArg::Object(ObjectArg::ImmOrOwnedObject(gas_ref()));
    let validator_arg = CallArg::pure(&addr("0x44")).unwrap();
    ptb.move_call(
        framework::SUI_SYSTEM_ADDRESS,
        governance::sui_system_module(),
        governance::governance_ident(governance::ADD_STAKE_FUN_NAME),
        vec![],
        vec![
            CallArg::Object(framework::sui_system_state_mut()),
            coin_arg,
            validator_arg,
        ],
    )
    .unwrap();
    let pt = ptb.finish();

    assert_eq!(pt.inputs.len(), 3);
    match &pt.commands[0] {
        Command::MoveCall(call) => {
            assert_eq!(
                call.arguments.as_slice(),
                &[
                    Argument::Input(0),
                    Argument::Input(1),
                    Argument::Input(2)
                ]
            );
        }
        other => panic!("expected MoveCall, got {:?}", other),
    }
}

// -----------------------------------------------------------------------
// Wire bytes
// -----------------------------------------------------------------------

/// Reference encoding of the transfer vector, written out field by field
/// against the published wire layout rather than through the codec, so
/// the two byte sequences come from independent encoders.
fn reference_transfer_sui_bytes(
    sender: &SuiAddress,
    recipient: &SuiAddress,
    amount: u64,
    gas: &ObjectRef,
    gas_budget: u64,
    gas_price: u64,
) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(0); // TransactionData::V1
    out.push(0); // TransactionKind::ProgrammableTransaction

    out.push(2); // two inputs
    out.push(0); // CallArg::Pure (recipient)
    out.push(32);
    out.extend_from_slice(recipient.as_bytes());
    out.push(0); // CallArg::Pure (amount)
    out.push(8);
    out.extend_from_slice(&amount.to_le_bytes());

    out.push(2); // two commands
    out.push(2); // Command::SplitCoins
    out.push(0); // Argument::GasCoin
    out.push(1); // one amount
    out.push(1); // Argument::Input
    out.extend_from_slice(&1u16.to_le_bytes());
    out.push(1); // Command::TransferObjects
    out.push(1); // one object
    out.push(2); // Argument::Result
    out.extend_from_slice(&0u16.to_le_bytes());
    out.push(1); // Argument::Input (recipient)
    out.extend_from_slice(&0u16.to_le_bytes());

    out.extend_from_slice(sender.as_bytes());

    out.push(1); // one gas payment coin
    out.extend_from_slice(gas.object_id.as_bytes());
    out.extend_from_slice(&gas.version.to_le_bytes());
    out.push(32);
    out.extend_from_slice(gas.digest.as_bytes());
    out.extend_from_slice(sender.as_bytes()); // gas owner
    out.extend_from_slice(&gas_price.to_le_bytes());
    out.extend_from_slice(&gas_budget.to_le_bytes());

    out.push(0); // TransactionExpiration::None
    out
}

#[test]
fn transfer_sui_matches_reference_encoder() {
    let sender = addr(SENDER);
    let recipient = sender;
    let amount = 1_000_000u64; // 0.001 SUI
    let gas_budget = 10_000_000u64;
    let gas_price = 1000u64;

    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_sui(recipient, Some(amount)).unwrap();
    let tx = TransactionData::new_programmable(
        sender,
        vec![gas_ref()],
        ptb.finish(),
        gas_budget,
        gas_price,
    );
    let encoded = to_bytes(&tx).unwrap();

    let expected = reference_transfer_sui_bytes(
        &sender,
        &recipient,
        amount,
        &gas_ref(),
        gas_budget,
        gas_price,
    );
    assert_eq!(encoded, expected);
}

#[test]
fn transaction_data_roundtrips_through_the_codec() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.pay_sui(&[addr("0x123456")], &[1_000_000]).unwrap();
    let tx = TransactionData::new_programmable(
        addr(SENDER),
        vec![gas_ref()],
        ptb.finish(),
        10_000_000,
        1000,
    );

    let bytes = to_bytes(&tx).unwrap();
    let decoded: TransactionData = from_bytes(&bytes).unwrap();
    assert_eq!(decoded, tx);
    // Re-encoding the decoded value reproduces the original bytes.
    assert_eq!(to_bytes(&decoded).unwrap(), bytes);
}

#[test]
fn encoding_is_deterministic_across_builders() {
    let build = || {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(addr(SENDER), Some(100_000)).unwrap();
        let tx = TransactionData::new_programmable(
            addr(SENDER),
            vec![gas_ref()],
            ptb.finish(),
            10_000_000,
            1000,
        );
        to_bytes(&tx).unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn sponsored_transaction_carries_the_sponsor_as_gas_owner() {
    let sponsor = addr("0x99");
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_sui(addr(SENDER), Some(1)).unwrap();
    let tx = TransactionData::new_programmable_allow_sponsor(
        addr(SENDER),
        vec![gas_ref()],
        ptb.finish(),
        10_000_000,
        1000,
        sponsor,
    );
    let TransactionData::V1(v1) = &tx;
    assert_eq!(v1.gas_data.owner, sponsor);
    assert_eq!(v1.sender, addr(SENDER));
    assert_eq!(v1.expiration, TransactionExpiration::None);
    assert!(matches!(
        v1.kind,
        TransactionKind::ProgrammableTransaction(_)
    ));
}

#[test]
fn transaction_digest_is_stable_and_32_bytes() {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_sui(addr(SENDER), Some(1_000_000)).unwrap();
    let tx = TransactionData::new_programmable(
        addr(SENDER),
        vec![gas_ref()],
        ptb.finish(),
        10_000_000,
        1000,
    );
    let first = tx.digest().unwrap();
    let second = tx.digest().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_bytes().len(), 32);

    // Any byte change in the envelope moves the digest.
    let other = TransactionData::new_programmable(
        addr(SENDER),
        vec![gas_ref()],
        {
            let mut ptb = ProgrammableTransactionBuilder::new();
            ptb.transfer_sui(addr(SENDER), Some(1_000_001)).unwrap();
            ptb.finish()
        },
        10_000_000,
        1000,
    );
    assert_ne!(first, other.digest().unwrap());
}

#[test]
fn identifier_rejected_in_malformed_wire_data() {
    // A MoveCall whose module name carries a space must not decode.
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.move_call(
        framework::SUI_FRAMEWORK_ADDRESS,
        Identifier::new("coin").unwrap(),
        Identifier::new("zero").unwrap(),
        vec![framework::sui_type_tag()],
        vec![],
    )
    .unwrap();
    let pt = ptb.finish();
    let mut bytes = to_bytes(&pt).unwrap();
    // Corrupt the first identifier byte ("coin" -> " oin" is invalid).
    let pos = bytes
        .windows(4)
        .position(|w| w == b"coin")
        .expect("module name present");
    bytes[pos] = b' ';
    assert!(from_bytes::<crate::transaction::ProgrammableTransaction>(&bytes).is_err());
}

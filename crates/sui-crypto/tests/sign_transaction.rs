//! End-to-end signing of a real transaction envelope.

use sui_crypto::{Intent, IntentMessage, Signature, SuiKeyPair};
use sui_types::{Digest, ObjectRef, ProgrammableTransactionBuilder, SuiAddress, TransactionData};

fn sample_transaction() -> TransactionData {
    let sender = SuiAddress::from_hex(
        "0xd77955e670f42c1bc5e94b9e68e5fe9bdbed9134d784f2a14dfe5fc1b24b5d9f",
    )
    .unwrap();
    let gas = ObjectRef::new(
        SuiAddress::from_hex(
            "0x13c1c3d0e15b4039cec4291c75b77c972c10c8e8e70ab4ca174cf336917cb4db",
        )
        .unwrap(),
        14924029,
        Digest::from_base58("HvbE2UZny6cP4KukaXetmj4jjpKTDTjVo23XEcu7VgSn").unwrap(),
    );
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.transfer_sui(sender, Some(1_000_000)).unwrap();
    TransactionData::new_programmable(sender, vec![gas], ptb.finish(), 10_000_000, 1000)
}

#[test]
fn transaction_signature_has_the_wire_shape() {
    let keypair = SuiKeyPair::ed25519_from_seed(&[1u8; 32]);
    let message = IntentMessage::new(Intent::sui_transaction(), sample_transaction());
    let signature = Signature::new_secure(&message, &keypair).unwrap();

    assert_eq!(signature.as_bytes().len(), 97);
    assert_eq!(signature.as_bytes()[0], 0);
    assert_eq!(signature.public_key_bytes(), keypair.public_key());
    signature.verify_secure(&message).unwrap();
}

#[test]
fn any_byte_change_invalidates_the_signature() {
    let keypair = SuiKeyPair::ed25519_from_seed(&[1u8; 32]);
    let message = IntentMessage::new(Intent::sui_transaction(), sample_transaction());
    let signature = Signature::new_secure(&message, &keypair).unwrap();

    // Same logical transfer with a different gas budget.
    let TransactionData::V1(mut v1) = sample_transaction();
    v1.gas_data.budget += 1;
    let altered = IntentMessage::new(Intent::sui_transaction(), TransactionData::V1(v1));
    assert!(signature.verify_secure(&altered).is_err());
}

#[test]
fn signatures_from_different_keys_differ() {
    let message = IntentMessage::new(Intent::sui_transaction(), sample_transaction());
    let a = Signature::new_secure(&message, &SuiKeyPair::ed25519_from_seed(&[1u8; 32])).unwrap();
    let b = Signature::new_secure(&message, &SuiKeyPair::ed25519_from_seed(&[2u8; 32])).unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

//! Well-known framework addresses and system objects.
//!
//! These are process-wide immutable values fixed by the ledger's genesis,
//! not configuration.

use crate::address::{ObjectID, SequenceNumber, SuiAddress};
use crate::identifier::Identifier;
use crate::object::{ObjectArg, OBJECT_START_VERSION};
use crate::type_tag::{StructTag, TypeTag};

const fn system_address(low_byte: u8) -> SuiAddress {
    let mut bytes = [0u8; 32];
    bytes[31] = low_byte;
    SuiAddress::new(bytes)
}

/// Address of the Move standard library package.
pub const MOVE_STDLIB_ADDRESS: SuiAddress = system_address(0x1);

/// Address of the Sui framework package.
pub const SUI_FRAMEWORK_ADDRESS: SuiAddress = system_address(0x2);

/// Address of the Sui system package.
pub const SUI_SYSTEM_ADDRESS: SuiAddress = system_address(0x3);

/// Id of the singleton system state object.
pub const SUI_SYSTEM_STATE_OBJECT_ID: ObjectID = system_address(0x5);

/// Shared version the system state object was created at.
pub const SUI_SYSTEM_STATE_OBJECT_SHARED_VERSION: SequenceNumber = OBJECT_START_VERSION;

/// Id of the singleton clock object.
pub const SUI_CLOCK_OBJECT_ID: ObjectID = system_address(0x6);

/// Shared version the clock object was created at.
pub const SUI_CLOCK_OBJECT_SHARED_VERSION: SequenceNumber = OBJECT_START_VERSION;

/// Smallest unit of SUI; one SUI is 10^9 MIST.
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// The system state object, declared mutable.
///
/// Staking and other governance calls take this as their first argument.
///
/// # Returns
/// The shared-object input for the system state.
pub fn sui_system_state_mut() -> ObjectArg {
    ObjectArg::SharedObject {
        id: SUI_SYSTEM_STATE_OBJECT_ID,
        initial_shared_version: SUI_SYSTEM_STATE_OBJECT_SHARED_VERSION,
        mutable: true,
    }
}

/// The clock object, read-only.
///
/// # Returns
/// The shared-object input for the clock.
pub fn sui_clock_object() -> ObjectArg {
    ObjectArg::SharedObject {
        id: SUI_CLOCK_OBJECT_ID,
        initial_shared_version: SUI_CLOCK_OBJECT_SHARED_VERSION,
        mutable: false,
    }
}

/// The type tag of the native gas coin, `0x2::sui::SUI`.
///
/// # Returns
/// The SUI coin struct tag wrapped as a type tag.
pub fn sui_type_tag() -> TypeTag {
    TypeTag::Struct(Box::new(StructTag {
        address: SUI_FRAMEWORK_ADDRESS,
        module: Identifier::new("sui").expect("static identifier"),
        name: Identifier::new("SUI").expect("static identifier"),
        type_params: Vec::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_addresses_render_short() {
        assert_eq!(SUI_FRAMEWORK_ADDRESS.to_hex_short(), "0x2");
        assert_eq!(SUI_SYSTEM_STATE_OBJECT_ID.to_hex_short(), "0x5");
    }

    #[test]
    fn system_state_is_mutable_shared() {
        match sui_system_state_mut() {
            ObjectArg::SharedObject {
                id,
                initial_shared_version,
                mutable,
            } => {
                assert_eq!(id, SUI_SYSTEM_STATE_OBJECT_ID);
                assert_eq!(initial_shared_version, OBJECT_START_VERSION);
                assert!(mutable);
            }
            other => panic!("unexpected arg {:?}", other),
        }
    }

    #[test]
    fn sui_coin_type_renders() {
        assert_eq!(sui_type_tag().to_canonical_short(), "0x2::sui::SUI");
    }
}

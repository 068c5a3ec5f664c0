//! Object references, ownership, and object-typed transaction inputs.

use serde::{Deserialize, Serialize};
use sui_primitives::bcs::{BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::PrimitivesError;

use crate::address::{ObjectID, SequenceNumber, SuiAddress};
use crate::digest::ObjectDigest;

/// Version given to every object at creation.
pub const OBJECT_START_VERSION: SequenceNumber = 1;

/// A reference to one exact version of an on-chain object.
///
/// Immutable once constructed; a transaction touching the object produces
/// a new reference with a higher version and different digest.
///
/// # Wire format
///
/// | Field     | Encoding                     |
/// |-----------|------------------------------|
/// | object_id | 32 raw bytes                 |
/// | version   | u64 little-endian            |
/// | digest    | ULEB128 length (32) + bytes  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    /// The referenced object's id.
    pub object_id: ObjectID,
    /// The referenced version.
    pub version: SequenceNumber,
    /// Content digest of that version.
    pub digest: ObjectDigest,
}

impl ObjectRef {
    /// Create an object reference.
    ///
    /// # Arguments
    /// * `object_id` - The object's id.
    /// * `version` - The referenced version.
    /// * `digest` - The content digest of that version.
    ///
    /// # Returns
    /// A new `ObjectRef`.
    pub fn new(object_id: ObjectID, version: SequenceNumber, digest: ObjectDigest) -> Self {
        ObjectRef {
            object_id,
            version,
            digest,
        }
    }
}

impl BcsEncode for ObjectRef {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.object_id.encode_into(w)?;
        self.version.encode_into(w)?;
        self.digest.encode_into(w)
    }
}

impl BcsDecode for ObjectRef {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(ObjectRef {
            object_id: ObjectID::decode_from(r)?,
            version: SequenceNumber::decode_from(r)?,
            digest: ObjectDigest::decode_from(r)?,
        })
    }
}

/// Who may use an object, as reported by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    /// Owned by a single address (variant 0).
    AddressOwner(SuiAddress),
    /// Owned by another object (variant 1).
    ObjectOwner(SuiAddress),
    /// Shared: usable by any transaction that declares it (variant 2).
    Shared {
        /// The version at which the object first became shared.
        #[serde(rename = "initial_shared_version")]
        initial_shared_version: SequenceNumber,
    },
    /// Frozen: readable by anyone, mutable by no one (variant 3).
    Immutable,
}

impl BcsEncode for Owner {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            Owner::AddressOwner(addr) => {
                w.write_uleb128(0)?;
                addr.encode_into(w)
            }
            Owner::ObjectOwner(addr) => {
                w.write_uleb128(1)?;
                addr.encode_into(w)
            }
            Owner::Shared {
                initial_shared_version,
            } => {
                w.write_uleb128(2)?;
                initial_shared_version.encode_into(w)
            }
            Owner::Immutable => w.write_uleb128(3),
        }
    }
}

impl BcsDecode for Owner {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(Owner::AddressOwner(SuiAddress::decode_from(r)?)),
            1 => Ok(Owner::ObjectOwner(SuiAddress::decode_from(r)?)),
            2 => Ok(Owner::Shared {
                initial_shared_version: SequenceNumber::decode_from(r)?,
            }),
            3 => Ok(Owner::Immutable),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid Owner variant {}",
                tag
            ))),
        }
    }
}

/// An object-typed transaction input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectArg {
    /// An exact version of an owned or immutable object (variant 0).
    ImmOrOwnedObject(ObjectRef),
    /// A shared object with a per-use mutability declaration (variant 1).
    SharedObject {
        /// The shared object's id.
        id: ObjectID,
        /// The version at which the object first became shared.
        initial_shared_version: SequenceNumber,
        /// Whether this transaction mutates the object.
        mutable: bool,
    },
}

impl ObjectArg {
    /// The identity this input is deduplicated on.
    ///
    /// # Returns
    /// The referenced object id.
    pub fn id(&self) -> ObjectID {
        match self {
            ObjectArg::ImmOrOwnedObject(obj_ref) => obj_ref.object_id,
            ObjectArg::SharedObject { id, .. } => *id,
        }
    }
}

impl BcsEncode for ObjectArg {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            ObjectArg::ImmOrOwnedObject(obj_ref) => {
                w.write_uleb128(0)?;
                obj_ref.encode_into(w)
            }
            ObjectArg::SharedObject {
                id,
                initial_shared_version,
                mutable,
            } => {
                w.write_uleb128(1)?;
                id.encode_into(w)?;
                initial_shared_version.encode_into(w)?;
                mutable.encode_into(w)
            }
        }
    }
}

impl BcsDecode for ObjectArg {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(ObjectArg::ImmOrOwnedObject(ObjectRef::decode_from(r)?)),
            1 => Ok(ObjectArg::SharedObject {
                id: ObjectID::decode_from(r)?,
                initial_shared_version: SequenceNumber::decode_from(r)?,
                mutable: bool::decode_from(r)?,
            }),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid ObjectArg variant {}",
                tag
            ))),
        }
    }
}

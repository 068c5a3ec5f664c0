//! Account addresses and object identifiers.
//!
//! Addresses and object ids share one 32-byte representation. Textually
//! they are `0x`-prefixed lowercase hex; short forms parse with implicit
//! left zero-padding, so `"0x2"` names the Sui framework package.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sui_primitives::bcs::{BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::{encoding, PrimitivesError};

use crate::TypesError;

/// Byte length of an address or object id.
pub const ADDRESS_LENGTH: usize = 32;

/// A 32-byte account address.
///
/// On the wire this encodes as the raw 32 bytes with no length prefix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SuiAddress([u8; ADDRESS_LENGTH]);

/// Object ids share the address representation.
pub type ObjectID = SuiAddress;

/// A monotonically increasing object version.
pub type SequenceNumber = u64;

impl SuiAddress {
    /// The all-zero address.
    pub const ZERO: SuiAddress = SuiAddress([0u8; ADDRESS_LENGTH]);

    /// Create an address from a raw 32-byte array.
    ///
    /// # Arguments
    /// * `bytes` - The 32 address bytes.
    ///
    /// # Returns
    /// A new `SuiAddress`.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        SuiAddress(bytes)
    }

    /// Create an address from a byte slice of at most 32 bytes.
    ///
    /// Shorter slices are left-padded with zeros, matching the textual
    /// short-form convention.
    ///
    /// # Arguments
    /// * `bytes` - Up to 32 bytes, big-endian significant.
    ///
    /// # Returns
    /// `Ok(SuiAddress)`, or an error if the slice is longer than 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        if bytes.len() > ADDRESS_LENGTH {
            return Err(TypesError::Codec(PrimitivesError::InvalidLength {
                expected: ADDRESS_LENGTH,
                got: bytes.len(),
            }));
        }
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr[ADDRESS_LENGTH - bytes.len()..].copy_from_slice(bytes);
        Ok(SuiAddress(arr))
    }

    /// Parse an address from a hex string with an optional `0x` prefix.
    ///
    /// Short strings are left-zero-padded to the full width.
    ///
    /// # Arguments
    /// * `s` - The hex string.
    ///
    /// # Returns
    /// `Ok(SuiAddress)` on success, or a parse error for non-hex input or
    /// input longer than 64 nibbles.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = encoding::decode_hex(s)
            .map_err(|e| TypesError::parse("address", e.to_string()))?;
        if bytes.len() > ADDRESS_LENGTH {
            return Err(TypesError::parse(
                "address",
                format!("{} bytes exceeds the {}-byte width", bytes.len(), ADDRESS_LENGTH),
            ));
        }
        Self::from_bytes(&bytes)
    }

    /// Return the raw address bytes.
    ///
    /// # Returns
    /// A reference to the 32-byte array.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Return the raw address bytes by value.
    ///
    /// # Returns
    /// The 32-byte array.
    pub const fn into_bytes(self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Render the full-width `0x`-prefixed lowercase hex form.
    ///
    /// # Returns
    /// A 66-character string.
    pub fn to_hex_literal(&self) -> String {
        encoding::encode_hex(&self.0)
    }

    /// Render the short `0x`-prefixed form with leading zeros trimmed.
    ///
    /// # Returns
    /// The short hex string (`"0x2"` for the framework address).
    pub fn to_hex_short(&self) -> String {
        encoding::encode_hex_short(&self.0)
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_literal())
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self.to_hex_short())
    }
}

impl FromStr for SuiAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        SuiAddress(bytes)
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BcsEncode for SuiAddress {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.0.encode_into(w)
    }
}

impl BcsDecode for SuiAddress {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(SuiAddress(<[u8; ADDRESS_LENGTH]>::decode_from(r)?))
    }
}

// JSON-RPC carries addresses as full-width hex strings.
impl Serialize for SuiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_literal())
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SuiAddress::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

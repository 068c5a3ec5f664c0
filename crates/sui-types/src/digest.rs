//! Content digests with a base58 textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sui_primitives::bcs::{BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::{encoding, PrimitivesError};

use crate::TypesError;

/// Byte length of a digest.
pub const DIGEST_LENGTH: usize = 32;

/// A 32-byte content hash, rendered textually as base58.
///
/// Unlike addresses, a digest encodes on the wire as a variable-length
/// byte sequence: a ULEB128 length of 32 followed by the raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest([u8; DIGEST_LENGTH]);

/// Digest of a specific object version.
pub type ObjectDigest = Digest;

/// Digest identifying a transaction.
pub type TransactionDigest = Digest;

impl Digest {
    /// Create a digest from a raw 32-byte array.
    ///
    /// # Arguments
    /// * `bytes` - The 32 digest bytes.
    ///
    /// # Returns
    /// A new `Digest`.
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Digest(bytes)
    }

    /// Parse a digest from its base58 textual form.
    ///
    /// # Arguments
    /// * `s` - A base58 string decoding to exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Digest)`, or a parse error for bad base58 or a wrong length.
    pub fn from_base58(s: &str) -> Result<Self, TypesError> {
        let bytes = encoding::decode_base58(s)
            .map_err(|e| TypesError::parse("digest", e.to_string()))?;
        if bytes.len() != DIGEST_LENGTH {
            return Err(TypesError::parse(
                "digest",
                format!("decodes to {} bytes, want {}", bytes.len(), DIGEST_LENGTH),
            ));
        }
        let mut arr = [0u8; DIGEST_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Digest(arr))
    }

    /// Return the raw digest bytes.
    ///
    /// # Returns
    /// A reference to the 32-byte array.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoding::encode_base58(&self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self)
    }
}

impl FromStr for Digest {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_base58(s)
    }
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BcsEncode for Digest {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        w.write_len(DIGEST_LENGTH)?;
        w.write_bytes(&self.0);
        Ok(())
    }
}

impl BcsDecode for Digest {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        let len = r.read_len()?;
        if len != DIGEST_LENGTH {
            return Err(PrimitivesError::MalformedEncoding(format!(
                "digest length {} on the wire, want {}",
                len, DIGEST_LENGTH
            )));
        }
        let bytes = r.read_bytes(DIGEST_LENGTH)?;
        let mut arr = [0u8; DIGEST_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Digest(arr))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_base58(&s).map_err(serde::de::Error::custom)
    }
}

//! Validated Move identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sui_primitives::bcs::{BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::PrimitivesError;

use crate::TypesError;

/// A Move module, function, or struct name.
///
/// Valid identifiers match `[a-zA-Z_][a-zA-Z0-9_]*`. On the wire an
/// identifier encodes as a ULEB128 length followed by its UTF-8 bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier, validating the Move naming rules.
    ///
    /// # Arguments
    /// * `s` - The candidate name.
    ///
    /// # Returns
    /// `Ok(Identifier)`, or a parse error for an empty string or invalid
    /// characters.
    pub fn new(s: impl Into<String>) -> Result<Self, TypesError> {
        let s = s.into();
        if !is_valid_identifier(&s) {
            return Err(TypesError::parse(
                "identifier",
                format!("{:?} is not a valid Move identifier", s),
            ));
        }
        Ok(Identifier(s))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl FromStr for Identifier {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

impl BcsEncode for Identifier {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.0.encode_into(w)
    }
}

impl BcsDecode for Identifier {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        let s = String::decode_from(r)?;
        if !is_valid_identifier(&s) {
            return Err(PrimitivesError::MalformedEncoding(format!(
                "{:?} is not a valid Move identifier",
                s
            )));
        }
        Ok(Identifier(s))
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Identifier::new(s).map_err(serde::de::Error::custom)
    }
}

//! Move type tags and their textual form.
//!
//! A type tag names a runtime Move type: a primitive, a vector, or a
//! struct such as `0x2::coin::Coin<0x2::sui::SUI>`. The textual parser
//! accepts short-form addresses and nested, comma-separated type
//! parameters; `Display` renders the canonical full-width form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sui_primitives::bcs::{BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::PrimitivesError;

use crate::address::SuiAddress;
use crate::identifier::Identifier;
use crate::TypesError;

/// A runtime Move type.
///
/// Variant numbering is part of the wire contract: the original protocol
/// appended `u16`/`u32`/`u256` after `struct`, so the indices are not in
/// declaration-intuitive order and must never be renumbered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The `bool` primitive (variant 0).
    Bool,
    /// The `u8` primitive (variant 1).
    U8,
    /// The `u64` primitive (variant 2).
    U64,
    /// The `u128` primitive (variant 3).
    U128,
    /// The `address` primitive (variant 4).
    Address,
    /// The `signer` primitive (variant 5).
    Signer,
    /// A homogeneous vector (variant 6).
    Vector(Box<TypeTag>),
    /// A struct instantiation (variant 7).
    Struct(Box<StructTag>),
    /// The `u16` primitive (variant 8).
    U16,
    /// The `u32` primitive (variant 9).
    U32,
    /// The `u256` primitive (variant 10).
    U256,
}

/// A fully qualified Move struct with its type parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructTag {
    /// Package address the struct is defined in.
    pub address: SuiAddress,
    /// Defining module name.
    pub module: Identifier,
    /// Struct name.
    pub name: Identifier,
    /// Generic type parameters, possibly empty.
    pub type_params: Vec<TypeTag>,
}

impl TypeTag {
    /// Parse a type tag from its textual form.
    ///
    /// # Arguments
    /// * `s` - e.g. `"u64"`, `"vector<u8>"`, or
    ///   `"0xabc::Coin::Xxxx<0x789::AAA::ppp<0x111::mod3::func3>>"`.
    ///
    /// # Returns
    /// `Ok(TypeTag)`, or a parse error describing the first offending
    /// position.
    pub fn parse(s: &str) -> Result<Self, TypesError> {
        let mut parser = TypeParser::new(s);
        let tag = parser.parse_type()?;
        parser.expect_end()?;
        Ok(tag)
    }

    /// Render the short textual form, with address leading zeros trimmed.
    ///
    /// # Returns
    /// e.g. `"0x2::sui::SUI"`.
    pub fn to_canonical_short(&self) -> String {
        match self {
            TypeTag::Struct(s) => s.to_canonical_short(),
            TypeTag::Vector(inner) => format!("vector<{}>", inner.to_canonical_short()),
            other => other.to_string(),
        }
    }
}

impl StructTag {
    /// Parse a struct tag from its textual form.
    ///
    /// # Arguments
    /// * `s` - e.g. `"0x23::coin::Xxxx"`.
    ///
    /// # Returns
    /// `Ok(StructTag)`, or a parse error if the input is not a struct
    /// type.
    pub fn parse(s: &str) -> Result<Self, TypesError> {
        match TypeTag::parse(s)? {
            TypeTag::Struct(tag) => Ok(*tag),
            other => Err(TypesError::parse(
                "struct tag",
                format!("{} is not a struct type", other),
            )),
        }
    }

    /// Render the short textual form.
    ///
    /// # Returns
    /// e.g. `"0x2::coin::Coin<0x2::sui::SUI>"`.
    pub fn to_canonical_short(&self) -> String {
        let mut out = format!(
            "{}::{}::{}",
            self.address.to_hex_short(),
            self.module,
            self.name
        );
        if !self.type_params.is_empty() {
            let params: Vec<String> = self
                .type_params
                .iter()
                .map(|t| t.to_canonical_short())
                .collect();
            out.push('<');
            out.push_str(&params.join(", "));
            out.push('>');
        }
        out
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U16 => f.write_str("u16"),
            TypeTag::U32 => f.write_str("u32"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::U256 => f.write_str("u256"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if !self.type_params.is_empty() {
            let params: Vec<String> =
                self.type_params.iter().map(|t| t.to_string()).collect();
            write!(f, "<{}>", params.join(", "))?;
        }
        Ok(())
    }
}

impl FromStr for TypeTag {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::parse(s)
    }
}

impl FromStr for StructTag {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StructTag::parse(s)
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TypeTag::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Wire encoding
// ---------------------------------------------------------------------------

impl BcsEncode for TypeTag {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            TypeTag::Bool => w.write_uleb128(0),
            TypeTag::U8 => w.write_uleb128(1),
            TypeTag::U64 => w.write_uleb128(2),
            TypeTag::U128 => w.write_uleb128(3),
            TypeTag::Address => w.write_uleb128(4),
            TypeTag::Signer => w.write_uleb128(5),
            TypeTag::Vector(inner) => {
                w.write_uleb128(6)?;
                inner.encode_into(w)
            }
            TypeTag::Struct(s) => {
                w.write_uleb128(7)?;
                s.encode_into(w)
            }
            TypeTag::U16 => w.write_uleb128(8),
            TypeTag::U32 => w.write_uleb128(9),
            TypeTag::U256 => w.write_uleb128(10),
        }
    }
}

impl BcsDecode for TypeTag {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(TypeTag::Bool),
            1 => Ok(TypeTag::U8),
            2 => Ok(TypeTag::U64),
            3 => Ok(TypeTag::U128),
            4 => Ok(TypeTag::Address),
            5 => Ok(TypeTag::Signer),
            6 => Ok(TypeTag::Vector(Box::new(TypeTag::decode_from(r)?))),
            7 => Ok(TypeTag::Struct(Box::new(StructTag::decode_from(r)?))),
            8 => Ok(TypeTag::U16),
            9 => Ok(TypeTag::U32),
            10 => Ok(TypeTag::U256),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid TypeTag variant {}",
                tag
            ))),
        }
    }
}

impl BcsEncode for StructTag {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.address.encode_into(w)?;
        self.module.encode_into(w)?;
        self.name.encode_into(w)?;
        self.type_params.encode_into(w)
    }
}

impl BcsDecode for StructTag {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(StructTag {
            address: SuiAddress::decode_from(r)?,
            module: Identifier::decode_from(r)?,
            name: Identifier::decode_from(r)?,
            type_params: Vec::<TypeTag>::decode_from(r)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Textual parser
// ---------------------------------------------------------------------------

struct TypeParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn new(input: &'a str) -> Self {
        TypeParser { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, n: usize) {
        self.pos += n;
    }

    fn err(&self, reason: impl Into<String>) -> TypesError {
        TypesError::parse(
            "type tag",
            format!("{} at position {} in {:?}", reason.into(), self.pos, self.input),
        )
    }

    fn expect_end(&self) -> Result<(), TypesError> {
        if self.pos != self.input.len() {
            return Err(self.err("trailing characters"));
        }
        Ok(())
    }

    /// Take a run of identifier characters.
    fn take_ident(&mut self) -> Result<&'a str, TypesError> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(rest.len());
        if end == 0 {
            return Err(self.err("expected an identifier"));
        }
        self.bump(end);
        Ok(&rest[..end])
    }

    fn expect(&mut self, token: &str) -> Result<(), TypesError> {
        if !self.rest().starts_with(token) {
            return Err(self.err(format!("expected {:?}", token)));
        }
        self.bump(token.len());
        Ok(())
    }

    fn parse_type(&mut self) -> Result<TypeTag, TypesError> {
        if self.rest().starts_with("0x") || self.rest().starts_with("0X") {
            return Ok(TypeTag::Struct(Box::new(self.parse_struct()?)));
        }
        let token = self.take_ident()?;
        // A primitive name followed by `::` is really a struct whose
        // address was written without the 0x prefix; only bare tokens are
        // primitives.
        if self.rest().starts_with("::") {
            return Ok(TypeTag::Struct(Box::new(self.parse_struct_after_address(token)?)));
        }
        match token {
            "bool" => Ok(TypeTag::Bool),
            "u8" => Ok(TypeTag::U8),
            "u16" => Ok(TypeTag::U16),
            "u32" => Ok(TypeTag::U32),
            "u64" => Ok(TypeTag::U64),
            "u128" => Ok(TypeTag::U128),
            "u256" => Ok(TypeTag::U256),
            "address" => Ok(TypeTag::Address),
            "signer" => Ok(TypeTag::Signer),
            "vector" => {
                self.expect("<")?;
                let inner = self.parse_type()?;
                self.expect(">")?;
                Ok(TypeTag::Vector(Box::new(inner)))
            }
            other => Err(self.err(format!("unknown type {:?}", other))),
        }
    }

    fn parse_struct(&mut self) -> Result<StructTag, TypesError> {
        let rest = self.rest();
        let end = rest.find("::").ok_or_else(|| self.err("expected '::'"))?;
        let addr_str = &rest[..end];
        self.bump(end);
        self.parse_struct_after_address(addr_str)
    }

    fn parse_struct_after_address(&mut self, addr_str: &str) -> Result<StructTag, TypesError> {
        let address = SuiAddress::from_hex(addr_str)
            .map_err(|_| self.err(format!("invalid address {:?}", addr_str)))?;
        self.expect("::")?;
        let module = Identifier::new(self.take_ident()?)?;
        self.expect("::")?;
        let name = Identifier::new(self.take_ident()?)?;

        let mut type_params = Vec::new();
        if self.peek() == Some('<') {
            self.bump(1);
            loop {
                type_params.push(self.parse_type()?);
                match self.peek() {
                    Some(',') => {
                        self.bump(1);
                        // Allow a single space after the comma.
                        if self.peek() == Some(' ') {
                            self.bump(1);
                        }
                    }
                    Some('>') => {
                        self.bump(1);
                        break;
                    }
                    _ => return Err(self.err("expected ',' or '>'")),
                }
            }
        }
        Ok(StructTag {
            address,
            module,
            name,
            type_params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> SuiAddress {
        SuiAddress::from_hex(s).unwrap()
    }

    #[test]
    fn parses_plain_struct() {
        let tag = StructTag::parse("0x23::coin::Xxxx").unwrap();
        assert_eq!(tag.address, addr("0x23"));
        assert_eq!(tag.module.as_str(), "coin");
        assert_eq!(tag.name.as_str(), "Xxxx");
        assert!(tag.type_params.is_empty());
    }

    #[test]
    fn parses_three_level_nesting() {
        let tag = StructTag::parse("0xabc::Coin::Xxxx<0x789::AAA::ppp<0x111::mod3::func3>>")
            .unwrap();
        assert_eq!(tag.address, addr("0xabc"));
        let inner = match &tag.type_params[0] {
            TypeTag::Struct(s) => s,
            other => panic!("expected struct, got {}", other),
        };
        assert_eq!(inner.address, addr("0x789"));
        let innermost = match &inner.type_params[0] {
            TypeTag::Struct(s) => s,
            other => panic!("expected struct, got {}", other),
        };
        assert_eq!(innermost.module.as_str(), "mod3");
        assert_eq!(innermost.name.as_str(), "func3");
        assert!(innermost.type_params.is_empty());
    }

    #[test]
    fn parses_primitives_and_vectors() {
        assert_eq!(TypeTag::parse("u64").unwrap(), TypeTag::U64);
        assert_eq!(
            TypeTag::parse("vector<u8>").unwrap(),
            TypeTag::Vector(Box::new(TypeTag::U8))
        );
        let nested = TypeTag::parse("vector<vector<address>>").unwrap();
        assert_eq!(
            nested,
            TypeTag::Vector(Box::new(TypeTag::Vector(Box::new(TypeTag::Address))))
        );
    }

    #[test]
    fn parses_multiple_type_params() {
        let tag = StructTag::parse("0x2::table::Table<address, u64>").unwrap();
        assert_eq!(tag.type_params.len(), 2);
        assert_eq!(tag.type_params[0], TypeTag::Address);
        assert_eq!(tag.type_params[1], TypeTag::U64);
    }

    #[test]
    fn rejects_malformed_inputs() {
        for bad in [
            "0x123abcg::coin::Xxxx",
            "0x1::m1::f1<0x2::m2::f2>x",
            "0x1::m1::f1<<0x3::m3::f3>0x2::m2::f2>",
            "<0x3::m3::f3>0x1::m1::f1<0x2::m2::f2>",
            "0x1::m1",
            "",
        ] {
            assert!(TypeTag::parse(bad).is_err(), "{:?} should fail", bad);
        }
    }

    #[test]
    fn display_uses_full_width_addresses() {
        let tag = TypeTag::parse("0x1::mmm1::fff1<0x123abcdef::mm2::ff3>").unwrap();
        assert_eq!(
            tag.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000001::mmm1::fff1<0x0000000000000000000000000000000000000000000000000000000123abcdef::mm2::ff3>"
        );
    }

    #[test]
    fn short_display_trims_leading_zeros() {
        let tag = TypeTag::parse("0x1::m1::f1<0x2::m2::f2<0x123abcdef::m3::f3>>").unwrap();
        assert_eq!(
            tag.to_canonical_short(),
            "0x1::m1::f1<0x2::m2::f2<0x123abcdef::m3::f3>>"
        );
    }

    #[test]
    fn struct_tag_wire_form() {
        use sui_primitives::bcs::{from_bytes, to_bytes};
        let tag = TypeTag::parse("0x2::sui::SUI").unwrap();
        let bytes = to_bytes(&tag).unwrap();
        // variant 7, 32-byte address, then two identifiers.
        assert_eq!(bytes[0], 7);
        assert_eq!(bytes.len(), 1 + 32 + 4 + 4 + 1);
        let back: TypeTag = from_bytes(&bytes).unwrap();
        assert_eq!(back, tag);
    }
}

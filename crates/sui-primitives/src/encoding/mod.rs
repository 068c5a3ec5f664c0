//! String codecs for addresses, digests, and RPC payloads.
//!
//! Addresses render as `0x`-prefixed lowercase hex; digests render as
//! base58; transaction bytes and signatures travel over JSON-RPC as
//! standard base64.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::PrimitivesError;

/// Decode a hex string with an optional `0x`/`0X` prefix.
///
/// An odd number of nibbles is accepted and left-padded with a zero, so
/// `"0x2"` decodes to `[0x02]`.
///
/// # Arguments
/// * `s` - The hex string.
///
/// # Returns
/// The decoded bytes, or `InvalidHex` for non-hex characters.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let stripped = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let padded = if stripped.len() % 2 != 0 {
        format!("0{}", stripped)
    } else {
        stripped.to_string()
    };
    Ok(hex::decode(padded)?)
}

/// Encode bytes as `0x`-prefixed lowercase hex.
///
/// # Arguments
/// * `bytes` - The bytes to encode.
///
/// # Returns
/// The full-width hex string.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Encode bytes as `0x`-prefixed hex with leading zeros trimmed.
///
/// `[0, 0, 1]` renders as `"0x1"`; all-zero input renders as `"0x0"`.
///
/// # Arguments
/// * `bytes` - The bytes to encode.
///
/// # Returns
/// The short hex string.
pub fn encode_hex_short(bytes: &[u8]) -> String {
    let full = hex::encode(bytes);
    let trimmed = full.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

/// Encode bytes as standard base64.
///
/// # Arguments
/// * `bytes` - The bytes to encode.
///
/// # Returns
/// The base64 string.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode a standard base64 string.
///
/// # Arguments
/// * `s` - The base64 string.
///
/// # Returns
/// The decoded bytes, or `InvalidBase64` for ill-formed input.
pub fn decode_base64(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    BASE64
        .decode(s)
        .map_err(|e| PrimitivesError::InvalidBase64(e.to_string()))
}

/// Encode bytes as base58 (Bitcoin alphabet, no checksum).
///
/// # Arguments
/// * `bytes` - The bytes to encode.
///
/// # Returns
/// The base58 string.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a base58 string (Bitcoin alphabet, no checksum).
///
/// # Arguments
/// * `s` - The base58 string.
///
/// # Returns
/// The decoded bytes, or `InvalidBase58` for ill-formed input.
pub fn decode_base58(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

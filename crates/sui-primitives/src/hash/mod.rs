//! Hash function primitives for the Sui SDK.
//!
//! The ledger derives every digest — signing digests, transaction digests,
//! object digests — from Blake2b with a 256-bit output.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

/// Blake2b with a 32-byte output.
type Blake2b256 = Blake2b<U32>;

/// Compute the Blake2b-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte Blake2b-256 digest.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the Blake2b-256 hash of several concatenated chunks.
///
/// Equivalent to hashing the concatenation of all chunks, without
/// materializing the joined buffer.
///
/// # Arguments
/// * `chunks` - Byte slices hashed in order.
///
/// # Returns
/// A 32-byte Blake2b-256 digest.
pub fn blake2b256_chunks(chunks: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    hasher.finalize().into()
}

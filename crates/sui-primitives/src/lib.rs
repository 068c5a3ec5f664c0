//! Sui SDK - Canonical codec, hashing, and string codecs.
//!
//! This crate provides the foundational building blocks for the Sui SDK:
//! - The canonical binary codec (BCS) used for every signed payload
//! - Blake2b-256 hashing
//! - Hex, base64, and base58 string codecs

pub mod bcs;
pub mod encoding;
pub mod hash;

mod error;
pub use error::PrimitivesError;

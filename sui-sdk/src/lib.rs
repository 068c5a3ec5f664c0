#![deny(missing_docs)]

//! Sui SDK - Complete SDK.
//!
//! Re-exports all Sui SDK components for convenient single-crate usage.

pub use sui_client as client;
pub use sui_crypto as crypto;
pub use sui_primitives as primitives;
pub use sui_types as types;

//! Sui SDK - Signing and digest layer.
//!
//! Wraps a canonically encoded payload with an intent tag, hashes it with
//! Blake2b-256, and signs with a scheme-tagged keypair, producing the
//! exact signature blob the ledger verifies.

pub mod intent;
pub mod keypair;
pub mod signature;

mod error;
pub use error::CryptoError;

pub use intent::{AppId, Intent, IntentMessage, IntentScope, IntentVersion};
pub use keypair::SuiKeyPair;
pub use signature::{Signature, SignatureScheme};

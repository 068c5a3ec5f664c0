//! Scheme-tagged signing keypairs.
//!
//! Only Ed25519 — the ledger's default scheme — is implemented. Key
//! material lives inside the dalek `SigningKey`, is never logged or
//! implicitly copied, and is zeroized when the keypair drops.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

use crate::signature::SignatureScheme;
use crate::CryptoError;

/// Byte length of an Ed25519 seed.
pub const SEED_LENGTH: usize = 32;

/// A signing keypair for one of the ledger's signature schemes.
pub struct SuiKeyPair {
    /// The Ed25519 signing key.
    inner: SigningKey,
}

impl SuiKeyPair {
    /// Generate a fresh Ed25519 keypair from the OS random number
    /// generator.
    ///
    /// # Returns
    /// A new random keypair.
    pub fn generate() -> Self {
        SuiKeyPair {
            inner: SigningKey::generate(&mut OsRng),
        }
    }

    /// Derive an Ed25519 keypair deterministically from a 32-byte seed.
    ///
    /// # Arguments
    /// * `seed` - The 32 seed bytes.
    ///
    /// # Returns
    /// The derived keypair.
    pub fn ed25519_from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        SuiKeyPair {
            inner: SigningKey::from_bytes(seed),
        }
    }

    /// Derive a keypair for the given scheme from a seed.
    ///
    /// # Arguments
    /// * `scheme` - The requested signature scheme.
    /// * `seed` - Seed bytes; must be 32 bytes for Ed25519.
    ///
    /// # Returns
    /// The keypair, `UnsupportedScheme` for any scheme other than
    /// Ed25519, or `InvalidKeyLength` for a wrong-sized seed.
    pub fn new(scheme: SignatureScheme, seed: &[u8]) -> Result<Self, CryptoError> {
        match scheme {
            SignatureScheme::Ed25519 => {
                let seed: &[u8; SEED_LENGTH] =
                    seed.try_into().map_err(|_| CryptoError::InvalidKeyLength {
                        expected: SEED_LENGTH,
                        got: seed.len(),
                    })?;
                Ok(Self::ed25519_from_seed(seed))
            }
            other => Err(CryptoError::UnsupportedScheme(other.flag())),
        }
    }

    /// The scheme this keypair signs with.
    ///
    /// # Returns
    /// Always `Ed25519` in this SDK.
    pub fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    /// The 32-byte public key.
    ///
    /// # Returns
    /// The verifying-key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        self.inner.verifying_key().to_bytes()
    }

    /// Sign a message, producing the raw 64-byte scheme signature.
    ///
    /// Ed25519 is deterministic: the same key and message always yield
    /// the same bytes.
    ///
    /// # Arguments
    /// * `message` - The bytes to sign (normally a signing digest).
    ///
    /// # Returns
    /// The raw 64-byte signature.
    pub fn sign_raw(&self, message: &[u8]) -> [u8; 64] {
        self.inner.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for SuiKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        write!(
            f,
            "SuiKeyPair(scheme: {:?}, public: {})",
            self.scheme(),
            sui_primitives::encoding::encode_hex(&self.public_key())
        )
    }
}

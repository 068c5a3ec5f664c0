//! Signature schemes and scheme-tagged signature blobs.
//!
//! A serialized signature is `flag ++ raw signature ++ public key`. The
//! flag values are part of the verified wire format on the remote side
//! and must never change.

use ed25519_dalek::{Verifier, VerifyingKey};
use sui_primitives::bcs::{self, BcsEncode};
use sui_primitives::{encoding, hash};

use crate::intent::IntentMessage;
use crate::keypair::SuiKeyPair;
use crate::CryptoError;

/// Raw Ed25519 signature length.
pub const ED25519_SIGNATURE_LENGTH: usize = 64;

/// Ed25519 public key length.
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;

/// Total length of a serialized Ed25519 signature blob:
/// 1 flag byte + 64 signature bytes + 32 public key bytes.
pub const ED25519_SUI_SIGNATURE_LENGTH: usize =
    1 + ED25519_SIGNATURE_LENGTH + ED25519_PUBLIC_KEY_LENGTH;

/// The asymmetric schemes the ledger recognizes.
///
/// Flag values are fixed wire constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureScheme {
    /// Ed25519, the default scheme (flag 0).
    Ed25519,
    /// ECDSA over secp256k1 (flag 1).
    Secp256k1,
    /// ECDSA over secp256r1 (flag 2).
    Secp256r1,
    /// A multi-signature aggregate (flag 3).
    MultiSig,
    /// BLS12-381 (flag 4).
    Bls12381,
}

impl SignatureScheme {
    /// The wire flag for this scheme.
    ///
    /// # Returns
    /// The one-byte flag.
    pub fn flag(&self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0,
            SignatureScheme::Secp256k1 => 1,
            SignatureScheme::Secp256r1 => 2,
            SignatureScheme::MultiSig => 3,
            SignatureScheme::Bls12381 => 4,
        }
    }

    /// Identify a scheme from its wire flag.
    ///
    /// # Arguments
    /// * `flag` - The flag byte.
    ///
    /// # Returns
    /// The scheme, or `UnsupportedScheme` for an unknown flag.
    pub fn from_flag(flag: u8) -> Result<Self, CryptoError> {
        match flag {
            0 => Ok(SignatureScheme::Ed25519),
            1 => Ok(SignatureScheme::Secp256k1),
            2 => Ok(SignatureScheme::Secp256r1),
            3 => Ok(SignatureScheme::MultiSig),
            4 => Ok(SignatureScheme::Bls12381),
            other => Err(CryptoError::UnsupportedScheme(other)),
        }
    }
}

/// Compute the digest a signature commits to.
///
/// The digest is Blake2b-256 over the intent bytes followed by the
/// payload's canonical encoding. The payload is encodable by
/// construction; an encode failure here aborts the operation as an
/// internal invariant violation.
///
/// # Arguments
/// * `message` - The intent-wrapped payload.
///
/// # Returns
/// The 32-byte signing digest.
pub fn signing_digest<T: BcsEncode>(
    message: &IntentMessage<T>,
) -> Result<[u8; 32], CryptoError> {
    let encoded = bcs::to_bytes(message)?;
    Ok(hash::blake2b256(&encoded))
}

/// A serialized, scheme-tagged signature.
///
/// Layout: `[1 byte scheme flag][raw signature][public key]`; for
/// Ed25519 the total length is fixed at 97 bytes. A signature is tied to
/// one exact `TransactionData` byte sequence — any byte change
/// invalidates it.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    blob: Vec<u8>,
}

impl Signature {
    /// Sign an intent-wrapped payload.
    ///
    /// Encodes the message, hashes it with Blake2b-256, signs the digest,
    /// and assembles the scheme-tagged blob.
    ///
    /// # Arguments
    /// * `message` - The intent-wrapped payload.
    /// * `keypair` - The signing keypair.
    ///
    /// # Returns
    /// The serialized signature.
    pub fn new_secure<T: BcsEncode>(
        message: &IntentMessage<T>,
        keypair: &SuiKeyPair,
    ) -> Result<Self, CryptoError> {
        let digest = signing_digest(message)?;
        let raw = keypair.sign_raw(&digest);

        let mut blob = Vec::with_capacity(ED25519_SUI_SIGNATURE_LENGTH);
        blob.push(keypair.scheme().flag());
        blob.extend_from_slice(&raw);
        blob.extend_from_slice(&keypair.public_key());
        Ok(Signature { blob })
    }

    /// Parse a signature blob, validating flag and length.
    ///
    /// # Arguments
    /// * `blob` - The serialized bytes.
    ///
    /// # Returns
    /// The signature, `UnsupportedScheme` for an unknown or
    /// unimplemented flag, or `InvalidSignature` for a bad length.
    pub fn from_blob(blob: Vec<u8>) -> Result<Self, CryptoError> {
        let flag = *blob
            .first()
            .ok_or_else(|| CryptoError::InvalidSignature("empty blob".to_string()))?;
        match SignatureScheme::from_flag(flag)? {
            SignatureScheme::Ed25519 => {
                if blob.len() != ED25519_SUI_SIGNATURE_LENGTH {
                    return Err(CryptoError::InvalidSignature(format!(
                        "ed25519 blob is {} bytes, want {}",
                        blob.len(),
                        ED25519_SUI_SIGNATURE_LENGTH
                    )));
                }
                Ok(Signature { blob })
            }
            other => Err(CryptoError::UnsupportedScheme(other.flag())),
        }
    }

    /// Parse a signature from its base64 wire form.
    ///
    /// # Arguments
    /// * `s` - The base64 string.
    ///
    /// # Returns
    /// The signature, or an error for bad base64 or a bad blob.
    pub fn from_base64(s: &str) -> Result<Self, CryptoError> {
        let blob = encoding::decode_base64(s)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Self::from_blob(blob)
    }

    /// The scheme this signature was produced with.
    pub fn scheme(&self) -> Result<SignatureScheme, CryptoError> {
        SignatureScheme::from_flag(self.blob[0])
    }

    /// The full serialized blob.
    pub fn as_bytes(&self) -> &[u8] {
        &self.blob
    }

    /// The raw signature portion of the blob.
    pub fn signature_bytes(&self) -> &[u8] {
        &self.blob[1..1 + ED25519_SIGNATURE_LENGTH]
    }

    /// The public key portion of the blob.
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.blob[1 + ED25519_SIGNATURE_LENGTH..]
    }

    /// The base64 wire form submitted over JSON-RPC.
    pub fn to_base64(&self) -> String {
        encoding::encode_base64(&self.blob)
    }

    /// Check this signature against an intent-wrapped payload.
    ///
    /// Verification on the ledger side is authoritative; this local check
    /// exists to back-test produced blobs.
    ///
    /// # Arguments
    /// * `message` - The intent-wrapped payload the signature should
    ///   commit to.
    ///
    /// # Returns
    /// `Ok(())` if the signature verifies, `InvalidSignature` otherwise.
    pub fn verify_secure<T: BcsEncode>(
        &self,
        message: &IntentMessage<T>,
    ) -> Result<(), CryptoError> {
        let digest = signing_digest(message)?;
        let public_key: [u8; ED25519_PUBLIC_KEY_LENGTH] = self
            .public_key_bytes()
            .try_into()
            .map_err(|_| CryptoError::InvalidSignature("bad public key length".to_string()))?;
        let verifying_key = VerifyingKey::from_bytes(&public_key)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let raw: [u8; ED25519_SIGNATURE_LENGTH] = self
            .signature_bytes()
            .try_into()
            .map_err(|_| CryptoError::InvalidSignature("bad signature length".to_string()))?;
        verifying_key
            .verify(&digest, &ed25519_dalek::Signature::from_bytes(&raw))
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", self.to_base64())
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intent;

    fn test_keypair() -> SuiKeyPair {
        SuiKeyPair::ed25519_from_seed(&[42u8; 32])
    }

    fn test_message() -> IntentMessage<u64> {
        IntentMessage::new(Intent::sui_transaction(), 1_000_000u64)
    }

    #[test]
    fn blob_has_fixed_shape() {
        let sig = Signature::new_secure(&test_message(), &test_keypair()).unwrap();
        assert_eq!(sig.as_bytes().len(), ED25519_SUI_SIGNATURE_LENGTH);
        assert_eq!(sig.as_bytes()[0], SignatureScheme::Ed25519.flag());
        assert_eq!(sig.public_key_bytes(), test_keypair().public_key());
        assert_eq!(sig.scheme().unwrap(), SignatureScheme::Ed25519);
    }

    #[test]
    fn signing_is_deterministic() {
        let a = Signature::new_secure(&test_message(), &test_keypair()).unwrap();
        let b = Signature::new_secure(&test_message(), &test_keypair()).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn signature_verifies_and_rejects_other_payloads() {
        let sig = Signature::new_secure(&test_message(), &test_keypair()).unwrap();
        sig.verify_secure(&test_message()).unwrap();

        let other = IntentMessage::new(Intent::sui_transaction(), 1_000_001u64);
        assert!(sig.verify_secure(&other).is_err());
    }

    #[test]
    fn intent_change_invalidates_the_signature() {
        let sig = Signature::new_secure(&test_message(), &test_keypair()).unwrap();
        let wrong_intent =
            IntentMessage::new(Intent::personal_message(), 1_000_000u64);
        assert!(sig.verify_secure(&wrong_intent).is_err());
    }

    #[test]
    fn base64_roundtrip() {
        let sig = Signature::new_secure(&test_message(), &test_keypair()).unwrap();
        let parsed = Signature::from_base64(&sig.to_base64()).unwrap();
        assert_eq!(parsed, sig);
    }

    #[test]
    fn malformed_blobs_are_rejected() {
        assert!(matches!(
            Signature::from_blob(vec![]),
            Err(CryptoError::InvalidSignature(_))
        ));
        // Right flag, wrong length.
        assert!(matches!(
            Signature::from_blob(vec![0u8; 50]),
            Err(CryptoError::InvalidSignature(_))
        ));
        // Known but unimplemented scheme.
        assert!(matches!(
            Signature::from_blob(vec![1u8; ED25519_SUI_SIGNATURE_LENGTH]),
            Err(CryptoError::UnsupportedScheme(1))
        ));
        // Unknown flag.
        assert!(matches!(
            Signature::from_blob(vec![9u8; ED25519_SUI_SIGNATURE_LENGTH]),
            Err(CryptoError::UnsupportedScheme(9))
        ));
    }

    #[test]
    fn signing_digest_matches_manual_hash() {
        use sui_primitives::bcs::to_bytes;
        use sui_primitives::hash::blake2b256;
        let message = test_message();
        let digest = signing_digest(&message).unwrap();
        let manual = blake2b256(&to_bytes(&message).unwrap());
        assert_eq!(digest, manual);
    }
}

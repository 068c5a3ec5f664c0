/// Error type for signing and signature-blob handling.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// A signature scheme flag is unknown, or the scheme is known but not
    /// implemented by this SDK.
    #[error("unsupported signature scheme (flag {0:#04x})")]
    UnsupportedScheme(u8),

    /// Key or seed material has the wrong length.
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength {
        /// The required byte length.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },

    /// A signature blob is malformed or fails verification.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// The payload could not be canonically encoded during signing.
    ///
    /// Payloads are encodable by construction, so this indicates an
    /// internal invariant violation; the signing operation aborts rather
    /// than signing a partial byte sequence.
    #[error("internal error: payload failed to encode during signing: {0}")]
    Internal(#[from] sui_primitives::PrimitivesError),
}

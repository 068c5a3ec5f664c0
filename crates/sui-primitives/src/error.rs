/// Unified error type for codec and string-encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// Decoding failed: truncated input, an invalid variant tag, an
    /// out-of-range length, trailing bytes, or a non-canonical length
    /// prefix.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Encoding failed: a value exceeds the representable range of its
    /// wire width (e.g. a sequence longer than a u32 can describe).
    #[error("encoding overflow: {0}")]
    EncodingOverflow(String),

    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A base58 string could not be decoded.
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    /// A base64 string could not be decoded.
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// A byte string has the wrong length for a fixed-width value.
    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength {
        /// The required byte length.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}

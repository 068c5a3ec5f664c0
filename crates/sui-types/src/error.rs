use crate::address::ObjectID;
use sui_primitives::PrimitivesError;

/// Error type for the transaction data model and builder.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// An address, identifier, type tag, or digest string failed to parse.
    #[error("invalid {kind}: {reason}")]
    Parse {
        /// What was being parsed ("address", "identifier", ...).
        kind: &'static str,
        /// Why parsing failed.
        reason: String,
    },

    /// A command references an input or result index that does not exist
    /// yet. This is a builder-ordering error, not a user-input error.
    #[error("dangling {kind} reference: index {index} out of bounds ({len} present)")]
    DanglingReference {
        /// Which list the reference points into ("input" or "command").
        kind: &'static str,
        /// The out-of-bounds index.
        index: u16,
        /// Current length of the referenced list.
        len: usize,
    },

    /// A recipe was given parallel lists of differing lengths.
    #[error("argument count mismatch: {recipients} recipients, {amounts} amounts")]
    ArgumentCountMismatch {
        /// Number of recipients supplied.
        recipients: usize,
        /// Number of amounts supplied.
        amounts: usize,
    },

    /// The same object was registered both as an owned reference and as a
    /// shared object within one transaction.
    #[error("mismatched object argument kinds for {0}")]
    MismatchedObjectArgument(ObjectID),

    /// A recipe that needs at least one coin was given none.
    #[error("coin list is empty")]
    EmptyCoins,

    /// The input pool grew past the u16 index space of `Argument::Input`.
    #[error("too many transaction inputs (limit {})", u16::MAX)]
    TooManyInputs,

    /// Canonical encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] PrimitivesError),
}

impl TypesError {
    pub(crate) fn parse(kind: &'static str, reason: impl Into<String>) -> Self {
        TypesError::Parse {
            kind,
            reason: reason.into(),
        }
    }
}

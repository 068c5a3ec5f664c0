//! Intent tags for domain-separated signing.
//!
//! Every signed payload is prefixed with a three-byte intent — scope,
//! version, application id — before hashing, so a signature produced for
//! one purpose can never be replayed in another context.

use sui_primitives::bcs::{BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::PrimitivesError;

/// What kind of payload is being signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentScope {
    /// A transaction envelope (variant 0).
    TransactionData,
    /// Transaction effects (variant 1).
    TransactionEffects,
    /// A checkpoint summary (variant 2).
    CheckpointSummary,
    /// A free-form user message (variant 3).
    PersonalMessage,
}

/// Version of the intent framing itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentVersion {
    /// The only version currently defined (variant 0).
    V0,
}

/// Which application the signature is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppId {
    /// The Sui ledger (variant 0).
    Sui,
}

/// The three-byte domain-separation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intent {
    /// Payload kind.
    pub scope: IntentScope,
    /// Framing version.
    pub version: IntentVersion,
    /// Application id.
    pub app_id: AppId,
}

impl Intent {
    /// The intent for signing a transaction envelope.
    ///
    /// # Returns
    /// `{ TransactionData, V0, Sui }` — bytes `[0, 0, 0]`.
    pub fn sui_transaction() -> Self {
        Intent {
            scope: IntentScope::TransactionData,
            version: IntentVersion::V0,
            app_id: AppId::Sui,
        }
    }

    /// The intent for signing a personal message.
    ///
    /// # Returns
    /// `{ PersonalMessage, V0, Sui }` — bytes `[3, 0, 0]`.
    pub fn personal_message() -> Self {
        Intent {
            scope: IntentScope::PersonalMessage,
            version: IntentVersion::V0,
            app_id: AppId::Sui,
        }
    }

    /// The three wire bytes of this intent.
    pub fn to_bytes(&self) -> [u8; 3] {
        let scope = match self.scope {
            IntentScope::TransactionData => 0,
            IntentScope::TransactionEffects => 1,
            IntentScope::CheckpointSummary => 2,
            IntentScope::PersonalMessage => 3,
        };
        let version = match self.version {
            IntentVersion::V0 => 0,
        };
        let app_id = match self.app_id {
            AppId::Sui => 0,
        };
        [scope, version, app_id]
    }
}

impl BcsEncode for Intent {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        w.write_bytes(&self.to_bytes());
        Ok(())
    }
}

impl BcsDecode for Intent {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        let scope = match r.read_uleb128()? {
            0 => IntentScope::TransactionData,
            1 => IntentScope::TransactionEffects,
            2 => IntentScope::CheckpointSummary,
            3 => IntentScope::PersonalMessage,
            tag => {
                return Err(PrimitivesError::MalformedEncoding(format!(
                    "invalid IntentScope variant {}",
                    tag
                )))
            }
        };
        let version = match r.read_uleb128()? {
            0 => IntentVersion::V0,
            tag => {
                return Err(PrimitivesError::MalformedEncoding(format!(
                    "invalid IntentVersion variant {}",
                    tag
                )))
            }
        };
        let app_id = match r.read_uleb128()? {
            0 => AppId::Sui,
            tag => {
                return Err(PrimitivesError::MalformedEncoding(format!(
                    "invalid AppId variant {}",
                    tag
                )))
            }
        };
        Ok(Intent {
            scope,
            version,
            app_id,
        })
    }
}

/// A payload wrapped with its intent.
///
/// The wire form is the three intent bytes immediately followed by the
/// payload's canonical encoding; the signing digest is Blake2b-256 over
/// exactly these bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentMessage<T> {
    /// The domain-separation tag.
    pub intent: Intent,
    /// The payload to sign.
    pub value: T,
}

impl<T> IntentMessage<T> {
    /// Wrap a payload with an intent.
    ///
    /// # Arguments
    /// * `intent` - The domain-separation tag.
    /// * `value` - The payload.
    ///
    /// # Returns
    /// The wrapped message.
    pub fn new(intent: Intent, value: T) -> Self {
        IntentMessage { intent, value }
    }
}

impl<T: BcsEncode> BcsEncode for IntentMessage<T> {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.intent.encode_into(w)?;
        self.value.encode_into(w)
    }
}

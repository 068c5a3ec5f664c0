//! The transaction wire model.
//!
//! A programmable transaction is an ordered list of typed inputs plus a
//! sequence of commands operating on those inputs and on each other's
//! outputs. `TransactionData` wraps one with sender and gas parameters;
//! its canonical bytes are exactly what the ledger hashes and verifies
//! signatures over, so every field order and variant index here is wire
//! contract, not style.

use sui_primitives::bcs::{self, BcsDecode, BcsEncode, BcsReader, BcsWriter};
use sui_primitives::{hash, PrimitivesError};

use crate::address::{ObjectID, SuiAddress};
use crate::digest::TransactionDigest;
use crate::identifier::Identifier;
use crate::object::{ObjectArg, ObjectRef};
use crate::type_tag::TypeTag;
use crate::TypesError;

/// Domain prefix mixed into a transaction digest.
///
/// The ledger hashes `b"TransactionData::" ++ BCS(data)`, binding the
/// digest to the payload type.
const TRANSACTION_DATA_DOMAIN: &[u8] = b"TransactionData::";

// ---------------------------------------------------------------------------
// Inputs and argument handles
// ---------------------------------------------------------------------------

/// A transaction input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallArg {
    /// An inline BCS-encoded scalar or struct value (variant 0).
    Pure(Vec<u8>),
    /// An on-chain object (variant 1).
    Object(ObjectArg),
}

impl CallArg {
    /// Build a `Pure` input by encoding a value.
    ///
    /// # Arguments
    /// * `value` - Any canonically encodable value.
    ///
    /// # Returns
    /// The `Pure` input, or an encoding error.
    pub fn pure<T: BcsEncode>(value: &T) -> Result<Self, TypesError> {
        Ok(CallArg::Pure(value.to_bcs_bytes()?))
    }
}

impl BcsEncode for CallArg {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            CallArg::Pure(bytes) => {
                w.write_uleb128(0)?;
                bytes.encode_into(w)
            }
            CallArg::Object(arg) => {
                w.write_uleb128(1)?;
                arg.encode_into(w)
            }
        }
    }
}

impl BcsDecode for CallArg {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(CallArg::Pure(Vec::<u8>::decode_from(r)?)),
            1 => Ok(CallArg::Object(ObjectArg::decode_from(r)?)),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid CallArg variant {}",
                tag
            ))),
        }
    }
}

/// A lightweight reference used inside commands.
///
/// Arguments index into the growing input and command lists, so they stay
/// valid as the transaction is assembled; a command may only reference
/// entries that already exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The transaction's gas coin (variant 0).
    GasCoin,
    /// An entry in the input list (variant 1).
    Input(u16),
    /// The sole output of a prior command (variant 2).
    Result(u16),
    /// One of several outputs of a prior command (variant 3).
    NestedResult(u16, u16),
}

impl BcsEncode for Argument {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            Argument::GasCoin => w.write_uleb128(0),
            Argument::Input(i) => {
                w.write_uleb128(1)?;
                i.encode_into(w)
            }
            Argument::Result(i) => {
                w.write_uleb128(2)?;
                i.encode_into(w)
            }
            Argument::NestedResult(i, j) => {
                w.write_uleb128(3)?;
                i.encode_into(w)?;
                j.encode_into(w)
            }
        }
    }
}

impl BcsDecode for Argument {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(Argument::GasCoin),
            1 => Ok(Argument::Input(u16::decode_from(r)?)),
            2 => Ok(Argument::Result(u16::decode_from(r)?)),
            3 => Ok(Argument::NestedResult(
                u16::decode_from(r)?,
                u16::decode_from(r)?,
            )),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid Argument variant {}",
                tag
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A single step of a programmable transaction.
///
/// Commands execute in list order; each may read any argument already
/// valid at its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Call a Move function (variant 0).
    MoveCall(ProgrammableMoveCall),
    /// Send objects to a recipient (variant 1).
    TransferObjects(Vec<Argument>, Argument),
    /// Split amounts off a coin, yielding one new coin per amount
    /// (variant 2).
    SplitCoins(Argument, Vec<Argument>),
    /// Merge source coins into a destination coin (variant 3).
    MergeCoins(Argument, Vec<Argument>),
    /// Publish a package from compiled module bytes (variant 4).
    Publish(Vec<Vec<u8>>, Vec<ObjectID>),
    /// Build a Move vector from arguments (variant 5).
    MakeMoveVec(Option<TypeTag>, Vec<Argument>),
    /// Upgrade a published package (variant 6).
    Upgrade(Vec<Vec<u8>>, Vec<ObjectID>, ObjectID, Argument),
}

impl Command {
    /// Iterate over every argument the command references.
    pub(crate) fn arguments(&self) -> Vec<Argument> {
        match self {
            Command::MoveCall(call) => call.arguments.clone(),
            Command::TransferObjects(objects, recipient) => {
                let mut args = objects.clone();
                args.push(*recipient);
                args
            }
            Command::SplitCoins(coin, amounts) => {
                let mut args = vec![*coin];
                args.extend_from_slice(amounts);
                args
            }
            Command::MergeCoins(dest, sources) => {
                let mut args = vec![*dest];
                args.extend_from_slice(sources);
                args
            }
            Command::Publish(_, _) => Vec::new(),
            Command::MakeMoveVec(_, elements) => elements.clone(),
            Command::Upgrade(_, _, _, ticket) => vec![*ticket],
        }
    }
}

impl BcsEncode for Command {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            Command::MoveCall(call) => {
                w.write_uleb128(0)?;
                call.encode_into(w)
            }
            Command::TransferObjects(objects, recipient) => {
                w.write_uleb128(1)?;
                objects.encode_into(w)?;
                recipient.encode_into(w)
            }
            Command::SplitCoins(coin, amounts) => {
                w.write_uleb128(2)?;
                coin.encode_into(w)?;
                amounts.encode_into(w)
            }
            Command::MergeCoins(dest, sources) => {
                w.write_uleb128(3)?;
                dest.encode_into(w)?;
                sources.encode_into(w)
            }
            Command::Publish(modules, deps) => {
                w.write_uleb128(4)?;
                modules.encode_into(w)?;
                deps.encode_into(w)
            }
            Command::MakeMoveVec(element_type, elements) => {
                w.write_uleb128(5)?;
                element_type.encode_into(w)?;
                elements.encode_into(w)
            }
            Command::Upgrade(modules, deps, package, ticket) => {
                w.write_uleb128(6)?;
                modules.encode_into(w)?;
                deps.encode_into(w)?;
                package.encode_into(w)?;
                ticket.encode_into(w)
            }
        }
    }
}

impl BcsDecode for Command {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(Command::MoveCall(ProgrammableMoveCall::decode_from(r)?)),
            1 => Ok(Command::TransferObjects(
                Vec::<Argument>::decode_from(r)?,
                Argument::decode_from(r)?,
            )),
            2 => Ok(Command::SplitCoins(
                Argument::decode_from(r)?,
                Vec::<Argument>::decode_from(r)?,
            )),
            3 => Ok(Command::MergeCoins(
                Argument::decode_from(r)?,
                Vec::<Argument>::decode_from(r)?,
            )),
            4 => Ok(Command::Publish(
                Vec::<Vec<u8>>::decode_from(r)?,
                Vec::<ObjectID>::decode_from(r)?,
            )),
            5 => Ok(Command::MakeMoveVec(
                Option::<TypeTag>::decode_from(r)?,
                Vec::<Argument>::decode_from(r)?,
            )),
            6 => Ok(Command::Upgrade(
                Vec::<Vec<u8>>::decode_from(r)?,
                Vec::<ObjectID>::decode_from(r)?,
                ObjectID::decode_from(r)?,
                Argument::decode_from(r)?,
            )),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid Command variant {}",
                tag
            ))),
        }
    }
}

/// A Move function invocation inside a programmable transaction.
///
/// Argument order is preserved exactly as supplied; the ledger
/// type-checks at execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgrammableMoveCall {
    /// Package containing the function.
    pub package: ObjectID,
    /// Module containing the function.
    pub module: Identifier,
    /// Function name.
    pub function: Identifier,
    /// Generic type instantiations.
    pub type_arguments: Vec<TypeTag>,
    /// Positional arguments.
    pub arguments: Vec<Argument>,
}

impl BcsEncode for ProgrammableMoveCall {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.package.encode_into(w)?;
        self.module.encode_into(w)?;
        self.function.encode_into(w)?;
        self.type_arguments.encode_into(w)?;
        self.arguments.encode_into(w)
    }
}

impl BcsDecode for ProgrammableMoveCall {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(ProgrammableMoveCall {
            package: ObjectID::decode_from(r)?,
            module: Identifier::decode_from(r)?,
            function: Identifier::decode_from(r)?,
            type_arguments: Vec::<TypeTag>::decode_from(r)?,
            arguments: Vec::<Argument>::decode_from(r)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Transaction data
// ---------------------------------------------------------------------------

/// The inputs and commands of a finalized programmable transaction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ProgrammableTransaction {
    /// Ordered, deduplicated input list.
    pub inputs: Vec<CallArg>,
    /// Ordered command list.
    pub commands: Vec<Command>,
}

impl BcsEncode for ProgrammableTransaction {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.inputs.encode_into(w)?;
        self.commands.encode_into(w)
    }
}

impl BcsDecode for ProgrammableTransaction {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(ProgrammableTransaction {
            inputs: Vec::<CallArg>::decode_from(r)?,
            commands: Vec::<Command>::decode_from(r)?,
        })
    }
}

/// The kind of work a transaction performs.
///
/// Clients only build programmable transactions; the system kinds
/// (epoch change, genesis, consensus prologue) are produced by validators
/// and never signed by a wallet, so they are not modeled here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    /// A programmable transaction (variant 0).
    ProgrammableTransaction(ProgrammableTransaction),
}

impl BcsEncode for TransactionKind {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            TransactionKind::ProgrammableTransaction(pt) => {
                w.write_uleb128(0)?;
                pt.encode_into(w)
            }
        }
    }
}

impl BcsDecode for TransactionKind {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(TransactionKind::ProgrammableTransaction(
                ProgrammableTransaction::decode_from(r)?,
            )),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "unsupported TransactionKind variant {}",
                tag
            ))),
        }
    }
}

/// When a transaction stops being valid for execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransactionExpiration {
    /// No expiration (variant 0).
    #[default]
    None,
    /// Invalid once the given epoch has passed (variant 1).
    Epoch(u64),
}

impl BcsEncode for TransactionExpiration {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            TransactionExpiration::None => w.write_uleb128(0),
            TransactionExpiration::Epoch(epoch) => {
                w.write_uleb128(1)?;
                epoch.encode_into(w)
            }
        }
    }
}

impl BcsDecode for TransactionExpiration {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(TransactionExpiration::None),
            1 => Ok(TransactionExpiration::Epoch(u64::decode_from(r)?)),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "invalid TransactionExpiration variant {}",
                tag
            ))),
        }
    }
}

/// Gas parameters carried in the signed transaction.
///
/// Field order is the wire order: payment, owner, price, budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasData {
    /// Coins consumed to pay for execution.
    pub payment: Vec<ObjectRef>,
    /// Who pays: the sender, or a sponsor.
    pub owner: SuiAddress,
    /// Declared price per gas unit.
    pub price: u64,
    /// Caller-declared ceiling on total gas spend.
    pub budget: u64,
}

impl BcsEncode for GasData {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.payment.encode_into(w)?;
        self.owner.encode_into(w)?;
        self.price.encode_into(w)?;
        self.budget.encode_into(w)
    }
}

impl BcsDecode for GasData {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(GasData {
            payment: Vec::<ObjectRef>::decode_from(r)?,
            owner: SuiAddress::decode_from(r)?,
            price: u64::decode_from(r)?,
            budget: u64::decode_from(r)?,
        })
    }
}

/// Version 1 of the signable transaction envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDataV1 {
    /// What the transaction does.
    pub kind: TransactionKind,
    /// The sending address.
    pub sender: SuiAddress,
    /// Gas payment parameters.
    pub gas_data: GasData,
    /// Validity bound.
    pub expiration: TransactionExpiration,
}

impl BcsEncode for TransactionDataV1 {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        self.kind.encode_into(w)?;
        self.sender.encode_into(w)?;
        self.gas_data.encode_into(w)?;
        self.expiration.encode_into(w)
    }
}

impl BcsDecode for TransactionDataV1 {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        Ok(TransactionDataV1 {
            kind: TransactionKind::decode_from(r)?,
            sender: SuiAddress::decode_from(r)?,
            gas_data: GasData::decode_from(r)?,
            expiration: TransactionExpiration::decode_from(r)?,
        })
    }
}

/// The versioned transaction envelope whose canonical bytes are hashed
/// and signed.
///
/// Derived once from a finalized programmable transaction plus gas
/// parameters; never mutated afterward — any byte change invalidates
/// prior signatures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionData {
    /// The only version currently defined (variant 0).
    V1(TransactionDataV1),
}

impl TransactionData {
    /// Build a `TransactionData` from a finalized programmable
    /// transaction, with the sender paying gas.
    ///
    /// # Arguments
    /// * `sender` - The sending address.
    /// * `gas_payment` - Coins funding execution.
    /// * `pt` - The finalized programmable transaction.
    /// * `gas_budget` - Ceiling on total gas spend.
    /// * `gas_price` - Declared price per gas unit.
    ///
    /// # Returns
    /// A new `TransactionData::V1`.
    pub fn new_programmable(
        sender: SuiAddress,
        gas_payment: Vec<ObjectRef>,
        pt: ProgrammableTransaction,
        gas_budget: u64,
        gas_price: u64,
    ) -> Self {
        Self::new_programmable_allow_sponsor(sender, gas_payment, pt, gas_budget, gas_price, sender)
    }

    /// Build a `TransactionData` with a sponsor paying gas on the
    /// sender's behalf.
    ///
    /// # Arguments
    /// * `sender` - The sending address.
    /// * `gas_payment` - Coins funding execution, owned by `sponsor`.
    /// * `pt` - The finalized programmable transaction.
    /// * `gas_budget` - Ceiling on total gas spend.
    /// * `gas_price` - Declared price per gas unit.
    /// * `sponsor` - The gas owner.
    ///
    /// # Returns
    /// A new `TransactionData::V1`.
    pub fn new_programmable_allow_sponsor(
        sender: SuiAddress,
        gas_payment: Vec<ObjectRef>,
        pt: ProgrammableTransaction,
        gas_budget: u64,
        gas_price: u64,
        sponsor: SuiAddress,
    ) -> Self {
        TransactionData::V1(TransactionDataV1 {
            kind: TransactionKind::ProgrammableTransaction(pt),
            sender,
            gas_data: GasData {
                payment: gas_payment,
                owner: sponsor,
                price: gas_price,
                budget: gas_budget,
            },
            expiration: TransactionExpiration::None,
        })
    }

    /// Compute the transaction digest the ledger will report for this
    /// payload.
    ///
    /// The digest is Blake2b-256 over a type-domain prefix followed by
    /// the canonical bytes.
    ///
    /// # Returns
    /// The transaction digest, or an encoding error.
    pub fn digest(&self) -> Result<TransactionDigest, TypesError> {
        let encoded = bcs::to_bytes(self)?;
        let digest = hash::blake2b256_chunks(&[TRANSACTION_DATA_DOMAIN, &encoded]);
        Ok(TransactionDigest::new(digest))
    }
}

impl BcsEncode for TransactionData {
    fn encode_into(&self, w: &mut BcsWriter) -> Result<(), PrimitivesError> {
        match self {
            TransactionData::V1(v1) => {
                w.write_uleb128(0)?;
                v1.encode_into(w)
            }
        }
    }
}

impl BcsDecode for TransactionData {
    fn decode_from(r: &mut BcsReader<'_>) -> Result<Self, PrimitivesError> {
        match r.read_uleb128()? {
            0 => Ok(TransactionData::V1(TransactionDataV1::decode_from(r)?)),
            tag => Err(PrimitivesError::MalformedEncoding(format!(
                "unsupported TransactionData version {}",
                tag
            ))),
        }
    }
}

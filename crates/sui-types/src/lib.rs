//! Sui SDK - Transaction data model and programmable-transaction builder.
//!
//! Provides the address, identifier, type-tag, and digest primitives, the
//! object and transaction wire types, and the builder that assembles
//! programmable transactions input-by-input and command-by-command while
//! guaranteeing byte-for-byte agreement with the ledger's own encoder.

pub mod address;
pub mod builder;
pub mod digest;
pub mod framework;
pub mod governance;
pub mod identifier;
pub mod object;
pub mod transaction;
pub mod type_tag;

mod error;
pub use error::TypesError;

pub use address::{ObjectID, SequenceNumber, SuiAddress};
pub use builder::ProgrammableTransactionBuilder;
pub use digest::{Digest, ObjectDigest, TransactionDigest};
pub use identifier::Identifier;
pub use object::{ObjectArg, ObjectRef, Owner};
pub use transaction::{
    Argument, CallArg, Command, GasData, ProgrammableMoveCall,
    ProgrammableTransaction, TransactionData, TransactionDataV1,
    TransactionExpiration, TransactionKind,
};
pub use type_tag::{StructTag, TypeTag};

#[cfg(test)]
mod tests;

//! Incremental construction of programmable transactions.
//!
//! The builder tracks a deduplicated input pool and an ordered command
//! list, and exposes the fixed recipe expansions (transfer, pay, stake,
//! move call). Two independent encoders given the same logical intent
//! must produce identical bytes, so every recipe registers its inputs in
//! a fixed order and never reorders caller-supplied arguments.

use std::collections::HashMap;

use sui_primitives::bcs::BcsEncode;

use crate::address::{ObjectID, SuiAddress};
use crate::object::{ObjectArg, ObjectRef};
use crate::transaction::{
    Argument, CallArg, Command, ProgrammableMoveCall, ProgrammableTransaction,
};
use crate::type_tag::TypeTag;
use crate::identifier::Identifier;
use crate::TypesError;

/// Deduplication key for one input-pool entry.
///
/// Pure values dedup on their encoded bytes; objects dedup on identity,
/// since one transaction must mention each object at most once.
#[derive(Clone, PartialEq, Eq, Hash)]
enum BuilderArg {
    Object(ObjectID),
    Pure(Vec<u8>),
}

/// Assembles one programmable transaction.
///
/// Not meant for concurrent mutation; build one transaction per builder
/// and run independent builders in parallel freely. `finish` consumes the
/// builder, making the result immutable.
#[derive(Default)]
pub struct ProgrammableTransactionBuilder {
    /// Lookup from dedup key to position in `inputs`.
    input_index: HashMap<BuilderArg, u16>,
    /// Append-only input pool; positions are stable once assigned.
    inputs: Vec<CallArg>,
    /// Append-only command list.
    commands: Vec<Command>,
}

impl ProgrammableTransactionBuilder {
    /// Create an empty builder.
    ///
    /// # Returns
    /// A builder with no inputs or commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of inputs registered so far.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of commands appended so far.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Finalize the transaction.
    ///
    /// # Returns
    /// The immutable `ProgrammableTransaction`; the builder is consumed.
    pub fn finish(self) -> ProgrammableTransaction {
        ProgrammableTransaction {
            inputs: self.inputs,
            commands: self.commands,
        }
    }

    // -----------------------------------------------------------------
    // Input pool
    // -----------------------------------------------------------------

    /// Register a pure input by encoding a value.
    ///
    /// If an input with identical encoded bytes already exists, its index
    /// is returned and no duplicate is created.
    ///
    /// # Arguments
    /// * `value` - Any canonically encodable value.
    ///
    /// # Returns
    /// The `Argument::Input` handle for the value.
    pub fn pure<T: BcsEncode>(&mut self, value: &T) -> Result<Argument, TypesError> {
        let bytes = value.to_bcs_bytes()?;
        self.pure_bytes(bytes)
    }

    /// Register an already-encoded pure input.
    ///
    /// # Arguments
    /// * `bytes` - The canonical encoding of the value.
    ///
    /// # Returns
    /// The `Argument::Input` handle for the bytes.
    pub fn pure_bytes(&mut self, bytes: Vec<u8>) -> Result<Argument, TypesError> {
        if let Some(&index) = self.input_index.get(&BuilderArg::Pure(bytes.clone())) {
            return Ok(Argument::Input(index));
        }
        let index = self.push_input(BuilderArg::Pure(bytes.clone()), CallArg::Pure(bytes))?;
        Ok(Argument::Input(index))
    }

    /// Register an object input.
    ///
    /// Deduplication keys on the object's identity. Re-registering the
    /// same shared object unifies the mutability requirement: the
    /// stronger (`mutable = true`) wins and upgrades the earlier entry in
    /// place, since mutability is a property of the object's use in the
    /// whole transaction. Registering one id as both an owned reference
    /// and a shared object fails.
    ///
    /// # Arguments
    /// * `object_arg` - The object input to register.
    ///
    /// # Returns
    /// The `Argument::Input` handle for the object.
    pub fn obj(&mut self, object_arg: ObjectArg) -> Result<Argument, TypesError> {
        let id = object_arg.id();
        if let Some(&index) = self.input_index.get(&BuilderArg::Object(id)) {
            let existing = match &self.inputs[index as usize] {
                CallArg::Object(arg) => *arg,
                // Object keys only ever map to object inputs.
                CallArg::Pure(_) => return Err(TypesError::MismatchedObjectArgument(id)),
            };
            let unified = match (existing, object_arg) {
                (
                    ObjectArg::SharedObject {
                        id: id1,
                        initial_shared_version: v1,
                        mutable: m1,
                    },
                    ObjectArg::SharedObject {
                        id: id2,
                        initial_shared_version: v2,
                        mutable: m2,
                    },
                ) if id1 == id2 && v1 == v2 => ObjectArg::SharedObject {
                    id: id1,
                    initial_shared_version: v1,
                    mutable: m1 || m2,
                },
                (old, new) if old == new => old,
                _ => return Err(TypesError::MismatchedObjectArgument(id)),
            };
            self.inputs[index as usize] = CallArg::Object(unified);
            return Ok(Argument::Input(index));
        }
        let index = self.push_input(BuilderArg::Object(id), CallArg::Object(object_arg))?;
        Ok(Argument::Input(index))
    }

    /// Register a transaction input of either kind.
    ///
    /// # Arguments
    /// * `call_arg` - The input to register.
    ///
    /// # Returns
    /// The `Argument::Input` handle.
    pub fn input(&mut self, call_arg: CallArg) -> Result<Argument, TypesError> {
        match call_arg {
            CallArg::Pure(bytes) => self.pure_bytes(bytes),
            CallArg::Object(arg) => self.obj(arg),
        }
    }

    fn push_input(&mut self, key: BuilderArg, value: CallArg) -> Result<u16, TypesError> {
        let index =
            u16::try_from(self.inputs.len()).map_err(|_| TypesError::TooManyInputs)?;
        self.inputs.push(value);
        self.input_index.insert(key, index);
        Ok(index)
    }

    // -----------------------------------------------------------------
    // Command graph
    // -----------------------------------------------------------------

    /// Append a command.
    ///
    /// Every argument the command references must already exist: inputs
    /// must be registered and results must come from earlier commands.
    ///
    /// # Arguments
    /// * `command` - The command to append.
    ///
    /// # Returns
    /// An `Argument::Result` handle referencing this command's output,
    /// or `DanglingReference` if the command points past the current
    /// pool or command bounds.
    pub fn command(&mut self, command: Command) -> Result<Argument, TypesError> {
        for arg in command.arguments() {
            match arg {
                Argument::GasCoin => {}
                Argument::Input(i) => {
                    if (i as usize) >= self.inputs.len() {
                        return Err(TypesError::DanglingReference {
                            kind: "input",
                            index: i,
                            len: self.inputs.len(),
                        });
                    }
                }
                Argument::Result(i) | Argument::NestedResult(i, _) => {
                    if (i as usize) >= self.commands.len() {
                        return Err(TypesError::DanglingReference {
                            kind: "command",
                            index: i,
                            len: self.commands.len(),
                        });
                    }
                }
            }
        }
        let index = self.commands.len() as u16;
        self.commands.push(command);
        Ok(Argument::Result(index))
    }

    // -----------------------------------------------------------------
    // Recipes
    // -----------------------------------------------------------------

    /// Transfer owned objects to a recipient.
    ///
    /// Registers the recipient, then each object reference, and appends
    /// one `TransferObjects` command.
    ///
    /// # Arguments
    /// * `recipient` - Address receiving the objects.
    /// * `object_refs` - Exact versions of the objects to send.
    pub fn transfer_object(
        &mut self,
        recipient: SuiAddress,
        object_refs: &[ObjectRef],
    ) -> Result<(), TypesError> {
        let recipient_arg = self.pure(&recipient)?;
        let mut object_args = Vec::with_capacity(object_refs.len());
        for object_ref in object_refs {
            object_args.push(self.obj(ObjectArg::ImmOrOwnedObject(*object_ref))?);
        }
        self.command(Command::TransferObjects(object_args, recipient_arg))?;
        Ok(())
    }

    /// Transfer SUI from the gas coin.
    ///
    /// With an amount, splits it off the gas coin and transfers the
    /// split result; without, transfers the entire gas coin directly.
    ///
    /// # Arguments
    /// * `recipient` - Address receiving the SUI.
    /// * `amount` - MIST to send, or `None` for the whole gas coin.
    pub fn transfer_sui(
        &mut self,
        recipient: SuiAddress,
        amount: Option<u64>,
    ) -> Result<(), TypesError> {
        let recipient_arg = self.pure(&recipient)?;
        let coin_arg = match amount {
            Some(amount) => {
                let amount_arg = self.pure(&amount)?;
                self.command(Command::SplitCoins(Argument::GasCoin, vec![amount_arg]))?
            }
            None => Argument::GasCoin,
        };
        self.command(Command::TransferObjects(vec![coin_arg], recipient_arg))?;
        Ok(())
    }

    /// Pay amounts to recipients out of specific coins.
    ///
    /// The first coin is the split target; any further coins are merged
    /// into it first.
    ///
    /// # Arguments
    /// * `coins` - Coins funding the payment; must be non-empty.
    /// * `recipients` - One address per amount, paired positionally.
    /// * `amounts` - MIST per recipient.
    pub fn pay(
        &mut self,
        coins: &[ObjectRef],
        recipients: &[SuiAddress],
        amounts: &[u64],
    ) -> Result<(), TypesError> {
        let Some((first, rest)) = coins.split_first() else {
            return Err(TypesError::EmptyCoins);
        };
        let coin_arg = self.obj(ObjectArg::ImmOrOwnedObject(*first))?;
        self.merge_into(coin_arg, rest)?;
        self.pay_impl(recipients, amounts, coin_arg)
    }

    /// Pay amounts to recipients out of the gas coin.
    ///
    /// # Arguments
    /// * `recipients` - One address per amount, paired positionally.
    /// * `amounts` - MIST per recipient.
    pub fn pay_sui(
        &mut self,
        recipients: &[SuiAddress],
        amounts: &[u64],
    ) -> Result<(), TypesError> {
        self.pay_impl(recipients, amounts, Argument::GasCoin)
    }

    /// Send the combined balance of a coin set to one recipient.
    ///
    /// Merges all payment coins into the first, then transfers the
    /// merged coin.
    ///
    /// # Arguments
    /// * `coins` - Coins to combine; must be non-empty.
    /// * `recipient` - Address receiving the combined balance.
    pub fn pay_all_sui(
        &mut self,
        coins: &[ObjectRef],
        recipient: SuiAddress,
    ) -> Result<(), TypesError> {
        let Some((first, rest)) = coins.split_first() else {
            return Err(TypesError::EmptyCoins);
        };
        let coin_arg = self.obj(ObjectArg::ImmOrOwnedObject(*first))?;
        self.merge_into(coin_arg, rest)?;
        let recipient_arg = self.pure(&recipient)?;
        self.command(Command::TransferObjects(vec![coin_arg], recipient_arg))?;
        Ok(())
    }

    /// Call a Move function, discarding its result.
    ///
    /// Arguments register in supplied order; the builder neither
    /// reorders nor type-checks them.
    ///
    /// # Arguments
    /// * `package` - Package containing the function.
    /// * `module` - Module containing the function.
    /// * `function` - Function name.
    /// * `type_arguments` - Generic type instantiations.
    /// * `call_args` - Positional arguments, pure and object mixed.
    pub fn move_call(
        &mut self,
        package: ObjectID,
        module: Identifier,
        function: Identifier,
        type_arguments: Vec<TypeTag>,
        call_args: Vec<CallArg>,
    ) -> Result<(), TypesError> {
        self.programmable_move_call(package, module, function, type_arguments, call_args)?;
        Ok(())
    }

    /// Call a Move function and keep a handle to its result.
    ///
    /// # Arguments
    /// Same as [`move_call`](Self::move_call).
    ///
    /// # Returns
    /// The result argument of the appended `MoveCall` command.
    pub fn programmable_move_call(
        &mut self,
        package: ObjectID,
        module: Identifier,
        function: Identifier,
        type_arguments: Vec<TypeTag>,
        call_args: Vec<CallArg>,
    ) -> Result<Argument, TypesError> {
        let mut arguments = Vec::with_capacity(call_args.len());
        for call_arg in call_args {
            arguments.push(self.input(call_arg)?);
        }
        self.command(Command::MoveCall(ProgrammableMoveCall {
            package,
            module,
            function,
            type_arguments,
            arguments,
        }))
    }

    /// Merge `sources` into an already-registered destination coin.
    fn merge_into(
        &mut self,
        dest: Argument,
        sources: &[ObjectRef],
    ) -> Result<(), TypesError> {
        if sources.is_empty() {
            return Ok(());
        }
        let mut source_args = Vec::with_capacity(sources.len());
        for source in sources {
            source_args.push(self.obj(ObjectArg::ImmOrOwnedObject(*source))?);
        }
        self.command(Command::MergeCoins(dest, source_args))?;
        Ok(())
    }

    /// Split `amounts` off `coin` and transfer each split result to its
    /// positional recipient.
    fn pay_impl(
        &mut self,
        recipients: &[SuiAddress],
        amounts: &[u64],
        coin: Argument,
    ) -> Result<(), TypesError> {
        if recipients.len() != amounts.len() {
            return Err(TypesError::ArgumentCountMismatch {
                recipients: recipients.len(),
                amounts: amounts.len(),
            });
        }
        if amounts.is_empty() {
            return Ok(());
        }
        if amounts.len() > u16::MAX as usize {
            return Err(TypesError::TooManyInputs);
        }
        let mut amount_args = Vec::with_capacity(amounts.len());
        for amount in amounts {
            amount_args.push(self.pure(amount)?);
        }
        let split_index = self.commands.len() as u16;
        self.command(Command::SplitCoins(coin, amount_args))?;
        for (position, recipient) in recipients.iter().enumerate() {
            let recipient_arg = self.pure(recipient)?;
            self.command(Command::TransferObjects(
                vec![Argument::NestedResult(split_index, position as u16)],
                recipient_arg,
            ))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Digest;

    fn addr(s: &str) -> SuiAddress {
        SuiAddress::from_hex(s).unwrap()
    }

    fn coin_ref(low_byte: u8) -> ObjectRef {
        let mut id = [0u8; 32];
        id[31] = low_byte;
        ObjectRef::new(SuiAddress::new(id), 1, Digest::new([low_byte; 32]))
    }

    #[test]
    fn pure_dedups_on_encoded_bytes() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let a = ptb.pure(&42u64).unwrap();
        let b = ptb.pure(&42u64).unwrap();
        assert_eq!(a, b);
        assert_eq!(ptb.input_count(), 1);
        // A different value gets a fresh slot.
        let c = ptb.pure(&43u64).unwrap();
        assert_eq!(c, Argument::Input(1));
    }

    #[test]
    fn distinct_types_with_same_bytes_share_an_input() {
        // 1u64 and a pure byte-equal encoding collapse to one entry:
        // dedup keys on bytes, not on source types.
        let mut ptb = ProgrammableTransactionBuilder::new();
        let a = ptb.pure(&1u64).unwrap();
        let b = ptb.pure_bytes(vec![1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(ptb.input_count(), 1);
    }

    #[test]
    fn object_dedups_on_identity() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let r = coin_ref(1);
        let a = ptb.obj(ObjectArg::ImmOrOwnedObject(r)).unwrap();
        let b = ptb.obj(ObjectArg::ImmOrOwnedObject(r)).unwrap();
        assert_eq!(a, b);
        assert_eq!(ptb.input_count(), 1);
    }

    #[test]
    fn shared_mutability_unifies_to_stronger() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let id = addr("0x5");
        let read_only = ObjectArg::SharedObject {
            id,
            initial_shared_version: 1,
            mutable: false,
        };
        let mutable = ObjectArg::SharedObject {
            id,
            initial_shared_version: 1,
            mutable: true,
        };
        let a = ptb.obj(read_only).unwrap();
        let b = ptb.obj(mutable).unwrap();
        assert_eq!(a, b);
        let pt = ptb.finish();
        assert_eq!(pt.inputs.len(), 1);
        match &pt.inputs[0] {
            CallArg::Object(ObjectArg::SharedObject { mutable, .. }) => assert!(mutable),
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn mutable_then_readonly_stays_mutable() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let id = addr("0x5");
        ptb.obj(ObjectArg::SharedObject {
            id,
            initial_shared_version: 1,
            mutable: true,
        })
        .unwrap();
        ptb.obj(ObjectArg::SharedObject {
            id,
            initial_shared_version: 1,
            mutable: false,
        })
        .unwrap();
        let pt = ptb.finish();
        match &pt.inputs[0] {
            CallArg::Object(ObjectArg::SharedObject { mutable, .. }) => assert!(mutable),
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn owned_vs_shared_conflict_is_rejected() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let r = coin_ref(9);
        ptb.obj(ObjectArg::ImmOrOwnedObject(r)).unwrap();
        let err = ptb
            .obj(ObjectArg::SharedObject {
                id: r.object_id,
                initial_shared_version: 1,
                mutable: true,
            })
            .unwrap_err();
        assert!(matches!(err, TypesError::MismatchedObjectArgument(_)));
    }

    #[test]
    fn command_rejects_dangling_input() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb
            .command(Command::TransferObjects(
                vec![Argument::Input(0)],
                Argument::GasCoin,
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            TypesError::DanglingReference { kind: "input", .. }
        ));
    }

    #[test]
    fn command_rejects_forward_result_reference() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let amount = ptb.pure(&5u64).unwrap();
        // References its own (not yet appended) index.
        let err = ptb
            .command(Command::SplitCoins(Argument::Result(0), vec![amount]))
            .unwrap_err();
        assert!(matches!(
            err,
            TypesError::DanglingReference { kind: "command", .. }
        ));
    }

    #[test]
    fn command_returns_sequential_results() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let amount = ptb.pure(&5u64).unwrap();
        let first = ptb
            .command(Command::SplitCoins(Argument::GasCoin, vec![amount]))
            .unwrap();
        assert_eq!(first, Argument::Result(0));
        let second = ptb
            .command(Command::MergeCoins(Argument::GasCoin, vec![first]))
            .unwrap();
        assert_eq!(second, Argument::Result(1));
    }

    #[test]
    fn pay_requires_matching_lengths() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb
            .pay_sui(&[addr("0x123456")], &[10, 20])
            .unwrap_err();
        assert!(matches!(err, TypesError::ArgumentCountMismatch { .. }));
    }

    #[test]
    fn pay_requires_a_coin() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb.pay(&[], &[addr("0x1")], &[10]).unwrap_err();
        assert!(matches!(err, TypesError::EmptyCoins));
    }
}

//! # Core Domain Entities
//!
//! Defines the ledger record types as consumed by the transaction validator
//! and the epoch processor.
//!
//! ## Clusters
//!
//! - **Outputs**: `Output`, `OutputRef`
//! - **Transactions**: `Input`, `Transaction`, `TransactionBuilder`

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest, Sha256};

use crate::errors::TypesError;

/// A 32-byte hash (SHA-256 of the raw transaction when finalized locally).
pub type Hash = [u8; 32];

/// A 32-byte Ed25519 public key identifying the owner of an output.
pub type PublicKey = [u8; 32];

/// Value carried by an output, in base units.
///
/// Signed so that a negative declared value is representable and can be
/// rejected by validation rather than silently wrapping.
pub type Amount = i64;

// =============================================================================
// CLUSTER A: OUTPUTS
// =============================================================================

/// A transaction output: a value locked to an owner key.
///
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    /// Value in base units.
    pub value: Amount,
    /// Public key allowed to spend this output.
    pub owner: PublicKey,
}

impl Output {
    /// Create a new output.
    pub const fn new(value: Amount, owner: PublicKey) -> Self {
        Self { value, owner }
    }
}

/// Coordinate of a single output: `(creating transaction hash, output index)`.
///
/// Equality, ordering and hashing are derived from both fields and nothing
/// else, so the unspent-output pool deduplicates references by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutputRef {
    /// Hash of the transaction that created the output.
    pub tx_hash: Hash,
    /// Position of the output in that transaction.
    pub output_index: u32,
}

impl OutputRef {
    /// Create a new output reference.
    pub const fn new(tx_hash: Hash, output_index: u32) -> Self {
        Self {
            tx_hash,
            output_index,
        }
    }

    /// Convert to bytes (hash || big-endian index).
    pub fn to_bytes(&self) -> [u8; 36] {
        let mut bytes = [0u8; 36];
        bytes[..32].copy_from_slice(&self.tx_hash);
        bytes[32..].copy_from_slice(&self.output_index.to_be_bytes());
        bytes
    }
}

impl fmt::Display for OutputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", hex::encode(&self.tx_hash[..8]), self.output_index)
    }
}

// =============================================================================
// CLUSTER B: TRANSACTIONS
// =============================================================================

/// A transaction input: a claim on a previously created output.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Hash of the transaction whose output is being spent.
    pub prev_tx_hash: Hash,
    /// Index of the spent output within that transaction.
    pub output_index: u32,
    /// Owner's signature over `Transaction::raw_data_to_sign` for this input.
    /// Empty until signed.
    #[serde_as(as = "Bytes")]
    pub signature: Vec<u8>,
}

impl Input {
    /// Create an unsigned input.
    pub fn new(prev_tx_hash: Hash, output_index: u32) -> Self {
        Self {
            prev_tx_hash,
            output_index,
            signature: Vec::new(),
        }
    }

    /// The output this input claims.
    pub fn outpoint(&self) -> OutputRef {
        OutputRef::new(self.prev_tx_hash, self.output_index)
    }

    /// Returns true once a signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }
}

/// A transaction: ordered inputs, ordered outputs and an identity hash.
///
/// The hash is assigned externally and is stable once set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identity.
    pub hash: Hash,
    /// Claimed outputs, in order.
    pub inputs: Vec<Input>,
    /// Created outputs, in order.
    pub outputs: Vec<Output>,
}

impl Transaction {
    /// Create an empty transaction with a zero hash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty transaction with the given identity.
    pub fn with_hash(hash: Hash) -> Self {
        Self {
            hash,
            ..Self::default()
        }
    }

    /// Append an unsigned input.
    pub fn add_input(&mut self, prev_tx_hash: Hash, output_index: u32) {
        self.inputs.push(Input::new(prev_tx_hash, output_index));
    }

    /// Append an output.
    pub fn add_output(&mut self, value: Amount, owner: PublicKey) {
        self.outputs.push(Output::new(value, owner));
    }

    /// Remove and return the input at `index`.
    pub fn remove_input(&mut self, index: usize) -> Result<Input, TypesError> {
        if index >= self.inputs.len() {
            return Err(TypesError::InputIndexOutOfRange {
                index,
                len: self.inputs.len(),
            });
        }
        Ok(self.inputs.remove(index))
    }

    /// Remove the first input claiming `outpoint`. Returns true if one was removed.
    pub fn remove_input_for(&mut self, outpoint: &OutputRef) -> bool {
        match self.inputs.iter().position(|i| i.outpoint() == *outpoint) {
            Some(pos) => {
                self.inputs.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Attach a signature to the input at `index`.
    pub fn add_signature(&mut self, signature: Vec<u8>, index: usize) -> Result<(), TypesError> {
        let len = self.inputs.len();
        let input = self
            .inputs
            .get_mut(index)
            .ok_or(TypesError::InputIndexOutOfRange { index, len })?;
        input.signature = signature;
        Ok(())
    }

    /// Input at `index`, if any.
    pub fn input(&self, index: usize) -> Option<&Input> {
        self.inputs.get(index)
    }

    /// Output at `index`, if any.
    pub fn output(&self, index: usize) -> Option<&Output> {
        self.outputs.get(index)
    }

    /// Number of inputs.
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of outputs.
    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Reference to this transaction's output at `index`.
    pub fn output_ref(&self, index: u32) -> OutputRef {
        OutputRef::new(self.hash, index)
    }

    /// Sum of declared output values, computed without overflow.
    pub fn total_output_value(&self) -> i128 {
        self.outputs.iter().map(|o| i128::from(o.value)).sum()
    }

    /// Canonical message signed by the owner of the output claimed by input `index`.
    ///
    /// Layout: `prev_tx_hash || output_index (BE u32) || for each output:
    /// value (BE i64) || owner`. Signatures are never part of the message.
    pub fn raw_data_to_sign(&self, index: usize) -> Result<Vec<u8>, TypesError> {
        let input = self.input(index).ok_or(TypesError::InputIndexOutOfRange {
            index,
            len: self.inputs.len(),
        })?;

        let mut raw = Vec::with_capacity(36 + self.outputs.len() * 40);
        raw.extend_from_slice(&input.prev_tx_hash);
        raw.extend_from_slice(&input.output_index.to_be_bytes());
        self.extend_with_outputs(&mut raw);
        Ok(raw)
    }

    /// Full byte representation including signatures, used for hashing.
    ///
    /// Layout: for each input: `prev_tx_hash || output_index (BE u32) ||
    /// signature length (BE u32) || signature`, then the outputs as in
    /// `raw_data_to_sign`.
    pub fn raw_tx(&self) -> Vec<u8> {
        let mut raw = Vec::new();
        for input in &self.inputs {
            raw.extend_from_slice(&input.prev_tx_hash);
            raw.extend_from_slice(&input.output_index.to_be_bytes());
            let sig_len = u32::try_from(input.signature.len()).unwrap_or(u32::MAX);
            raw.extend_from_slice(&sig_len.to_be_bytes());
            raw.extend_from_slice(&input.signature);
        }
        self.extend_with_outputs(&mut raw);
        raw
    }

    /// Compute SHA-256 over `raw_tx()`.
    pub fn compute_hash(&self) -> Hash {
        Sha256::digest(self.raw_tx()).into()
    }

    /// Set `hash` to `compute_hash()`.
    pub fn finalize(&mut self) {
        self.hash = self.compute_hash();
    }

    fn extend_with_outputs(&self, raw: &mut Vec<u8>) {
        for output in &self.outputs {
            raw.extend_from_slice(&output.value.to_be_bytes());
            raw.extend_from_slice(&output.owner);
        }
    }
}

/// Fluent construction of transactions.
///
/// ```rust,ignore
/// let tx = TransactionBuilder::new()
///     .input(funding.hash, 0)
///     .output(21, alice)
///     .output(21, bob)
///     .sign_with(|_, message| alice_key.sign(message).as_bytes().to_vec())
///     .build_finalized();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Start an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unsigned input.
    pub fn input(mut self, prev_tx_hash: Hash, output_index: u32) -> Self {
        self.tx.add_input(prev_tx_hash, output_index);
        self
    }

    /// Append an input claiming `outpoint`.
    pub fn spend(self, outpoint: OutputRef) -> Self {
        self.input(outpoint.tx_hash, outpoint.output_index)
    }

    /// Append an output.
    pub fn output(mut self, value: Amount, owner: PublicKey) -> Self {
        self.tx.add_output(value, owner);
        self
    }

    /// Set an explicit identity hash.
    pub fn hash(mut self, hash: Hash) -> Self {
        self.tx.hash = hash;
        self
    }

    /// Sign every input. The closure receives the input index and its
    /// canonical message and returns the signature bytes.
    pub fn sign_with<F>(mut self, mut signer: F) -> Self
    where
        F: FnMut(usize, &[u8]) -> Vec<u8>,
    {
        for index in 0..self.tx.inputs.len() {
            if let Ok(message) = self.tx.raw_data_to_sign(index) {
                self.tx.inputs[index].signature = signer(index, &message);
            }
        }
        self
    }

    /// Finish without touching the hash.
    pub fn build(self) -> Transaction {
        self.tx
    }

    /// Finish and set the hash to SHA-256 of the raw transaction.
    pub fn build_finalized(mut self) -> Transaction {
        self.tx.finalize();
        self.tx
    }
}

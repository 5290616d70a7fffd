//! # Unspent Output Pool
//!
//! The ledger state: exactly the outputs that are currently spendable,
//! keyed by `OutputRef`.
//!
//! ## Ownership
//!
//! `Clone` is a deep, independent copy. `TxHandler` clones the caller's pool
//! on construction, so the caller's instance is never aliased or mutated.

use std::collections::HashMap;

use super::entities::{Output, OutputRef};

/// Mapping from output reference to the output it names.
///
/// INVARIANTS:
/// - Keys are unique (value-equal `OutputRef`s are the same key)
/// - A present key denotes an output not consumed by any committed transaction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UtxoPool {
    utxos: HashMap<OutputRef, Output>,
}

impl UtxoPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the output named by `outpoint`, if unspent.
    pub fn get(&self, outpoint: &OutputRef) -> Option<&Output> {
        self.utxos.get(outpoint)
    }

    /// Inserts or replaces the output at `outpoint`, returning any previous one.
    pub fn put(&mut self, outpoint: OutputRef, output: Output) -> Option<Output> {
        self.utxos.insert(outpoint, output)
    }

    /// Inserts only when `outpoint` is not already present.
    ///
    /// Returns true if the output was inserted.
    pub fn insert_if_absent(&mut self, outpoint: OutputRef, output: Output) -> bool {
        match self.utxos.entry(outpoint) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(output);
                true
            }
        }
    }

    /// Removes and returns the output at `outpoint`.
    pub fn remove(&mut self, outpoint: &OutputRef) -> Option<Output> {
        self.utxos.remove(outpoint)
    }

    /// Checks if `outpoint` is unspent.
    pub fn contains(&self, outpoint: &OutputRef) -> bool {
        self.utxos.contains_key(outpoint)
    }

    /// Returns the number of unspent outputs.
    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    /// Returns true if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    /// Iterates all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&OutputRef, &Output)> {
        self.utxos.iter()
    }

    /// All references, sorted by `(tx_hash, output_index)`.
    pub fn refs(&self) -> Vec<OutputRef> {
        let mut refs: Vec<OutputRef> = self.utxos.keys().copied().collect();
        refs.sort_unstable();
        refs
    }

    /// Sum of all unspent values, computed without overflow.
    pub fn total_value(&self) -> i128 {
        self.utxos.values().map(|o| i128::from(o.value)).sum()
    }
}

impl FromIterator<(OutputRef, Output)> for UtxoPool {
    fn from_iter<I: IntoIterator<Item = (OutputRef, Output)>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}

impl Extend<(OutputRef, Output)> for UtxoPool {
    fn extend<I: IntoIterator<Item = (OutputRef, Output)>>(&mut self, iter: I) {
        self.utxos.extend(iter);
    }
}

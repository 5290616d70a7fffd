//! Value objects for the UTXO ledger.
//!
//! Immutable results produced by validation and epoch processing.

use serde::{Deserialize, Serialize};

use super::entities::{EpochNumber, Hash, Transaction};
use super::errors::Rejection;

/// Totals computed while validating an accepted transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Sum of the values of all claimed outputs.
    pub input_total: i128,
    /// Sum of the declared output values.
    pub output_total: i128,
}

impl ValidationSummary {
    /// Value consumed but not re-created (`input_total - output_total`).
    ///
    /// Never negative for a summary returned by `validate`.
    pub fn surplus(&self) -> i128 {
        self.input_total - self.output_total
    }
}

/// A candidate that was not accepted, with its position in the batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedTransaction {
    /// Index of the candidate in the submitted order.
    pub position: usize,
    /// Identity of the candidate.
    pub tx_hash: Hash,
    /// Why it was rejected.
    pub reason: Rejection,
}

/// Outcome of processing one epoch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochReport {
    /// Epoch sequence number.
    pub epoch: EpochNumber,
    /// Number of candidates submitted.
    pub candidates: usize,
    /// Accepted transactions, in submission order.
    pub accepted: Vec<Transaction>,
    /// Rejected candidates (empty when rejection recording is disabled).
    pub rejected: Vec<RejectedTransaction>,
    /// Outputs removed from the pool.
    pub spent_outputs: usize,
    /// Outputs added to the pool.
    pub created_outputs: usize,
    /// Outputs not added because their reference was already present.
    pub skipped_outputs: usize,
}

impl EpochReport {
    /// Creates an empty report for `epoch`.
    pub fn new(epoch: EpochNumber, candidates: usize) -> Self {
        Self {
            epoch,
            candidates,
            ..Default::default()
        }
    }

    /// Number of rejected candidates (always counted, even when reasons are
    /// not recorded).
    pub fn rejected_count(&self) -> usize {
        self.candidates - self.accepted.len()
    }

    /// Hashes of the accepted transactions, in order.
    pub fn accepted_hashes(&self) -> Vec<Hash> {
        self.accepted.iter().map(|tx| tx.hash).collect()
    }

    /// Returns true if the transaction with `hash` was accepted.
    pub fn is_accepted(&self, hash: &Hash) -> bool {
        self.accepted.iter().any(|tx| &tx.hash == hash)
    }

    /// The recorded rejection for the candidate at `position`, if any.
    pub fn rejection_at(&self, position: usize) -> Option<&Rejection> {
        self.rejected
            .iter()
            .find(|r| r.position == position)
            .map(|r| &r.reason)
    }

    /// Consume the report, keeping only the accepted transactions.
    pub fn into_accepted(self) -> Vec<Transaction> {
        self.accepted
    }
}

//! # Inbound Port - TxHandlerApi
//!
//! Primary driving port exposing the ledger to the enclosing node.
//!
//! | Method | Mutates pool |
//! |--------|--------------|
//! | `is_valid_tx` | no |
//! | `validate_tx` | no |
//! | `handle_txs` | yes |
//! | `handle_epoch` | yes |

use crate::domain::{EpochNumber, EpochReport, Rejection, Transaction, UtxoPool, ValidationSummary};

/// Primary API of the UTXO ledger.
///
/// # Example
///
/// ```rust,ignore
/// use utxo_ledger::ports::TxHandlerApi;
///
/// fn example(ledger: &mut impl TxHandlerApi, batch: &[Transaction]) {
///     // Speculative check, nothing is committed
///     if let Err(reason) = ledger.validate_tx(&batch[0]) {
///         println!("would reject: {reason}");
///     }
///
///     // Commit the epoch
///     let accepted = ledger.handle_txs(batch);
///     println!("epoch {} accepted {}", ledger.current_epoch(), accepted.len());
/// }
/// ```
pub trait TxHandlerApi: Send + Sync {
    /// Checks `tx` against the current pool without mutating it.
    fn is_valid_tx(&self, tx: &Transaction) -> bool;

    /// Like `is_valid_tx`, but explains the failure.
    ///
    /// # Errors
    /// The first `Rejection` encountered while scanning inputs then outputs.
    fn validate_tx(&self, tx: &Transaction) -> Result<ValidationSummary, Rejection>;

    /// Processes one epoch and returns the accepted transactions in
    /// submission order.
    fn handle_txs(&mut self, candidates: &[Transaction]) -> Vec<Transaction>;

    /// Processes one epoch and returns the full report.
    fn handle_epoch(&mut self, candidates: &[Transaction]) -> EpochReport;

    /// Read access to the current pool.
    fn utxo_pool(&self) -> &UtxoPool;

    /// Number of epochs processed so far.
    fn current_epoch(&self) -> EpochNumber;
}

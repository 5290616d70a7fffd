//! # Epoch Processor
//!
//! Selects a mutually consistent subset of a candidate batch and commits it
//! to the pool.
//!
//! ## Algorithm
//!
//! One deterministic left-to-right pass over the candidates as given:
//!
//! 1. `validate` against the working pool. Reject on failure.
//! 2. Reject if any input was already claimed by an earlier accepted
//!    candidate of this epoch (`claimed_this_epoch`).
//! 3. With chaining disabled, reject if any input names an output created
//!    in this epoch.
//! 4. Commit: remove every claimed output and record it as claimed, then
//!    insert `(tx.hash, j)` for every output `j` unless already present.
//!
//! Later candidates observe the effects of earlier ones, so a spender may
//! follow its funding transaction in the same batch. Conflicts go to the
//! first candidate in submission order.

use std::collections::HashSet;

use tracing::{debug, info_span, trace, warn};

use super::entities::{EpochNumber, LedgerConfig, OutputRef, Transaction};
use super::errors::{Rejection, SpendScope};
use super::pool::UtxoPool;
use super::validator::validate;
use super::value_objects::{EpochReport, RejectedTransaction};
use crate::ports::outbound::SignatureVerifier;

/// Per-epoch bookkeeping, discarded when the pass ends.
#[derive(Default)]
struct EpochState {
    claimed_this_epoch: HashSet<OutputRef>,
    created_this_epoch: HashSet<OutputRef>,
}

/// Single-pass batch selector.
#[derive(Clone, Debug, Default)]
pub struct EpochProcessor {
    config: LedgerConfig,
}

impl EpochProcessor {
    /// Creates a processor with the given configuration.
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Process one epoch, mutating `pool` in place.
    ///
    /// Never fails: every rejected candidate is reported in the returned
    /// `EpochReport` and leaves `pool` untouched.
    pub fn process<V>(
        &self,
        pool: &mut UtxoPool,
        candidates: &[Transaction],
        verifier: &V,
        epoch: EpochNumber,
    ) -> EpochReport
    where
        V: SignatureVerifier + ?Sized,
    {
        let span = info_span!("epoch", epoch, candidates = candidates.len());
        let _guard = span.enter();

        let mut report = EpochReport::new(epoch, candidates.len());
        let mut state = EpochState::default();

        for (position, tx) in candidates.iter().enumerate() {
            match self.admit(pool, &state, position, tx, verifier) {
                Ok(()) => {
                    self.apply(pool, &mut state, tx, &mut report);
                    trace!(
                        tx_hash = %hex::encode(tx.hash),
                        position,
                        "Transaction accepted"
                    );
                    report.accepted.push(tx.clone());
                }
                Err(reason) => {
                    debug!(
                        tx_hash = %hex::encode(tx.hash),
                        position,
                        kind = reason.kind(),
                        reason = %reason,
                        "Transaction rejected"
                    );
                    if self.config.record_rejections {
                        report.rejected.push(RejectedTransaction {
                            position,
                            tx_hash: tx.hash,
                            reason,
                        });
                    }
                }
            }
        }

        report
    }

    /// Decide whether `tx` may be committed given the epoch so far.
    fn admit<V>(
        &self,
        pool: &UtxoPool,
        state: &EpochState,
        position: usize,
        tx: &Transaction,
        verifier: &V,
    ) -> Result<(), Rejection>
    where
        V: SignatureVerifier + ?Sized,
    {
        if let Some(limit) = self.config.max_batch_size {
            if position >= limit {
                return Err(Rejection::BatchLimitExceeded { position, limit });
            }
        }

        validate(pool, tx, verifier)?;

        for (input_index, input) in tx.inputs.iter().enumerate() {
            let outpoint = input.outpoint();

            if state.claimed_this_epoch.contains(&outpoint) {
                return Err(Rejection::DoubleSpend {
                    input_index,
                    outpoint,
                    scope: SpendScope::WithinEpoch,
                });
            }

            if !self.config.allow_same_epoch_chaining
                && state.created_this_epoch.contains(&outpoint)
            {
                return Err(Rejection::UnconfirmedInput {
                    input_index,
                    outpoint,
                });
            }
        }

        Ok(())
    }

    /// Commit an admitted transaction.
    fn apply(
        &self,
        pool: &mut UtxoPool,
        state: &mut EpochState,
        tx: &Transaction,
        report: &mut EpochReport,
    ) {
        for input in &tx.inputs {
            let outpoint = input.outpoint();
            if pool.remove(&outpoint).is_some() {
                report.spent_outputs += 1;
            }
            state.claimed_this_epoch.insert(outpoint);
        }

        for (index, output) in (0u32..).zip(&tx.outputs) {
            let outpoint = tx.output_ref(index);
            if pool.insert_if_absent(outpoint, *output) {
                state.created_this_epoch.insert(outpoint);
                report.created_outputs += 1;
            } else {
                warn!(
                    outpoint = %outpoint,
                    "Output reference already present, keeping existing entry"
                );
                report.skipped_outputs += 1;
            }
        }
    }
}

/// Process one epoch with the default configuration and return the accepted
/// transactions in submission order.
pub fn commit<V>(pool: &mut UtxoPool, candidates: &[Transaction], verifier: &V) -> Vec<Transaction>
where
    V: SignatureVerifier + ?Sized,
{
    EpochProcessor::default()
        .process(pool, candidates, verifier, 0)
        .into_accepted()
}

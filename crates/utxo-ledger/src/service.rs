//! # Transaction Handler Service
//!
//! Application service layer that implements the `TxHandlerApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`TxHandlerApi`)
//! - Uses the outbound port (`SignatureVerifier`) for input authorization
//! - Owns its own copy of the pool and delegates to `validator` and
//!   `EpochProcessor`

use tracing::info;

use crate::domain::processor::EpochProcessor;
use crate::domain::validator;
use crate::domain::{
    EpochNumber, EpochReport, LedgerConfig, Rejection, Transaction, UtxoPool, ValidationSummary,
};
use crate::ports::inbound::TxHandlerApi;
use crate::ports::outbound::SignatureVerifier;

/// Transaction handler: a private unspent-output pool plus the epoch
/// processor that advances it.
pub struct TxHandler<V: SignatureVerifier> {
    pool: UtxoPool,
    verifier: V,
    processor: EpochProcessor,
    epoch: EpochNumber,
}

impl<V: SignatureVerifier> TxHandler<V> {
    /// Create a handler over a copy of `pool` with the default configuration.
    ///
    /// Later changes to `pool` are not observed, and the handler never
    /// mutates it.
    pub fn new(pool: &UtxoPool, verifier: V) -> Self {
        Self::with_config(pool, verifier, LedgerConfig::default())
    }

    /// Create a handler with an explicit configuration.
    pub fn with_config(pool: &UtxoPool, verifier: V, config: LedgerConfig) -> Self {
        Self {
            pool: pool.clone(),
            verifier,
            processor: EpochProcessor::new(config),
            epoch: 0,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        self.processor.config()
    }

    /// The signature oracle in use.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Consume the handler and return its pool.
    pub fn into_pool(self) -> UtxoPool {
        self.pool
    }
}

impl<V: SignatureVerifier> TxHandlerApi for TxHandler<V> {
    fn is_valid_tx(&self, tx: &Transaction) -> bool {
        validator::is_valid(&self.pool, tx, &self.verifier)
    }

    fn validate_tx(&self, tx: &Transaction) -> Result<ValidationSummary, Rejection> {
        validator::validate(&self.pool, tx, &self.verifier)
    }

    fn handle_txs(&mut self, candidates: &[Transaction]) -> Vec<Transaction> {
        self.handle_epoch(candidates).into_accepted()
    }

    fn handle_epoch(&mut self, candidates: &[Transaction]) -> EpochReport {
        self.epoch += 1;
        let report = self
            .processor
            .process(&mut self.pool, candidates, &self.verifier, self.epoch);

        info!(
            epoch = report.epoch,
            candidates = report.candidates,
            accepted = report.accepted.len(),
            rejected = report.rejected_count(),
            spent = report.spent_outputs,
            created = report.created_outputs,
            utxos = self.pool.len(),
            "Epoch processed"
        );

        report
    }

    fn utxo_pool(&self) -> &UtxoPool {
        &self.pool
    }

    fn current_epoch(&self) -> EpochNumber {
        self.epoch
    }
}

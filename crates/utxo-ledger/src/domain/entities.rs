//! Core domain entities for the UTXO ledger.
//!
//! The record types live in `shared-types`; this module re-exports them and
//! defines the ledger configuration.

use std::env;

// Re-export from shared-types for convenience
pub use shared_types::{Amount, Hash, Input, Output, OutputRef, PublicKey, Transaction};

/// Sequence number of an epoch. The first processed epoch is 1.
pub type EpochNumber = u64;

/// Ledger configuration.
///
/// The defaults reproduce the baseline contract: same-epoch chaining allowed,
/// no batch limit, every rejection reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Allow a candidate to spend an output created earlier in the same epoch.
    pub allow_same_epoch_chaining: bool,
    /// Maximum candidates evaluated per epoch. Later candidates are rejected
    /// without evaluation.
    pub max_batch_size: Option<usize>,
    /// Keep per-candidate rejection reasons in the `EpochReport`.
    pub record_rejections: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            allow_same_epoch_chaining: true,
            max_batch_size: None,
            record_rejections: true,
        }
    }
}

impl LedgerConfig {
    /// Creates a small-batch config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_batch_size: Some(64),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LEDGER_ALLOW_CHAINING`: Same-epoch chaining (default: true)
    /// - `LEDGER_MAX_BATCH_SIZE`: Candidate limit per epoch (default: unlimited)
    /// - `LEDGER_RECORD_REJECTIONS`: Keep rejection reasons (default: true)
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to the default.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            allow_same_epoch_chaining: lookup("LEDGER_ALLOW_CHAINING")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.allow_same_epoch_chaining),

            max_batch_size: lookup("LEDGER_MAX_BATCH_SIZE")
                .and_then(|v| v.parse().ok())
                .or(defaults.max_batch_size),

            record_rejections: lookup("LEDGER_RECORD_REJECTIONS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.record_rejections),
        }
    }
}

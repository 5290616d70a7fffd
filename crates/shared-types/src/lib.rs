//! # Shared Types Crate
//!
//! This crate contains the ledger value types consumed by the validator and
//! the epoch processor.
//!
//! ## Design Principles
//!
//! - **Value Identity**: `OutputRef` equality and hashing are defined purely by
//!   `(tx_hash, output_index)`. Two references with equal fields are the same
//!   reference.
//! - **Externally Assigned Hashes**: `Transaction::hash` is set by whoever
//!   builds the transaction (`finalize()` is offered as a convenience). The
//!   ledger core only reads it.
//! - **Canonical Signable Bytes**: `Transaction::raw_data_to_sign(i)` never
//!   covers signatures, so substituting a forged signature cannot change the
//!   signed message.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

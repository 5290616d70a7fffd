//! # Domain Layer - UTXO Ledger
//!
//! Pure business logic: no I/O apart from the injected signature oracle.
//!
//! ## Components
//!
//! - `pool`: UtxoPool, the unspent-output mapping
//! - `validator`: the single-transaction validity predicate
//! - `processor`: EpochProcessor, single-pass batch selection
//! - `entities`: LedgerConfig and re-exported record types
//! - `value_objects`: ValidationSummary, EpochReport, RejectedTransaction
//! - `errors`: Rejection enumeration
//!
//! ## Data Types
//!
//! - Hash: `[u8; 32]` (transaction identity)
//! - PublicKey: `[u8; 32]` (Ed25519 owner key)
//! - Amount: `i64`, summed as `i128` so totals are exact

pub mod entities;
pub mod errors;
pub mod pool;
pub mod processor;
pub mod validator;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use pool::*;
pub use processor::*;
pub use validator::*;
pub use value_objects::*;

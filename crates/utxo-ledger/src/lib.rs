//! # UTXO Ledger Core
//!
//! Validates candidate transactions against the unspent-output pool and
//! selects a mutually consistent subset to commit at each epoch.
//!
//! ## Purpose
//!
//! The double-spend and value-conservation checker that sits beneath a
//! consensus or block-production layer. Block assembly, fork choice, fees,
//! prioritization and wire formats are handled elsewhere.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Every claimed output is in the pool | `domain/validator.rs` - `validate()` |
//! | INVARIANT-2 | No output claimed twice by one transaction | `domain/validator.rs` - `claimed` set |
//! | INVARIANT-3 | Every input signed by the output owner | `domain/validator.rs` - `SignatureVerifier` |
//! | INVARIANT-4 | Output values non-negative | `domain/validator.rs` - output scan |
//! | INVARIANT-5 | sum(inputs) >= sum(outputs) | `domain/validator.rs` - exact `i128` totals |
//! | INVARIANT-6 | No output claimed twice in one epoch | `domain/processor.rs` - `claimed_this_epoch` |
//! | INVARIANT-7 | Created outputs never overwrite existing ones | `domain/pool.rs` - `insert_if_absent()` |
//!
//! ## Epoch Processing
//!
//! Candidates are processed in a single left-to-right pass. Each accepted
//! transaction is committed immediately, so a later candidate may spend an
//! output created earlier in the same batch.
//!
//! ```text
//! candidate ──validate──→ [rejected] (no mutation, recorded in EpochReport)
//!     │
//!     └──ok──→ claimed this epoch? ──yes──→ [rejected]
//!                     │
//!                     no
//!                     ↓
//!              remove spent refs, insert (tx.hash, j) refs ──→ [accepted]
//! ```
//!
//! Conflicts are resolved first-in-submission-order: when two candidates
//! claim the same output, the earlier one wins and the later one is rejected.
//!
//! ## Outbound Dependencies
//!
//! | Dependency | Trait | Purpose |
//! |-----------|-------|---------|
//! | Cryptographic oracle | `SignatureVerifier` | Input authorization |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ed25519.rs - Ed25519Verifier (shared-crypto)          │
//! │  service.rs          - TxHandler                                │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TxHandlerApi trait                         │
//! │  ports/outbound.rs - SignatureVerifier trait                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/pool.rs          - UtxoPool                             │
//! │  domain/validator.rs     - validate / is_valid                  │
//! │  domain/processor.rs     - EpochProcessor                       │
//! │  domain/entities.rs      - LedgerConfig                         │
//! │  domain/value_objects.rs - ValidationSummary, EpochReport       │
//! │  domain/errors.rs        - Rejection enum                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Synchronous and single-threaded. `validate` only reads the pool;
//! `EpochProcessor::process` takes `&mut UtxoPool`, so epochs against the
//! same pool are serialized by the borrow checker.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::TxHandler;

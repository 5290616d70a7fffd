//! # Shared Crypto - Ownership Keys and Signatures
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Output ownership, input authorization |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing
//! - **Strict lengths**: signatures that are not exactly 64 bytes are
//!   rejected before touching the curve
//!
//! Key generation takes an explicit RNG (`Ed25519KeyPair::generate_from`) or
//! a seed (`Ed25519KeyPair::from_seed`) so callers decide the randomness
//! scope; `generate()` is a thin wrapper over the thread RNG.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, SIGNATURE_LENGTH};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

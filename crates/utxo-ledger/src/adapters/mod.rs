//! # Adapters Module
//!
//! Infrastructure adapters implementing the ports.

pub mod ed25519;

pub use ed25519::Ed25519Verifier;

//! # Ed25519 Verifier
//!
//! `SignatureVerifier` backed by `shared-crypto`. Owner keys that are not
//! valid curve points and signatures that are not 64 bytes fail verification
//! instead of erroring.

use shared_crypto::Ed25519PublicKey;
use tracing::trace;

use crate::domain::PublicKey;
use crate::ports::outbound::SignatureVerifier;

/// Strict Ed25519 verification oracle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
        let result = Ed25519PublicKey::from_bytes(*owner)
            .and_then(|key| key.verify_slice(message, signature));

        match result {
            Ok(()) => true,
            Err(e) => {
                trace!(owner = %hex::encode(owner), error = %e, "Signature rejected");
                false
            }
        }
    }
}

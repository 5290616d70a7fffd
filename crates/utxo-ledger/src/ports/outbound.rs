//! Outbound (Driven) ports for the UTXO ledger.
//!
//! These traits define dependencies on external systems that the ledger
//! needs for operation.

use crate::domain::PublicKey;

/// Cryptographic verification oracle.
///
/// Decides whether `signature` proves that the holder of `owner` signed
/// `message`. Implementations must be deterministic and side-effect-free
/// from the ledger's point of view; malformed keys or signatures are simply
/// `false`.
pub trait SignatureVerifier: Send + Sync {
    /// Returns true if the signature verifies.
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool;
}

impl<T: SignatureVerifier + ?Sized> SignatureVerifier for &T {
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
        (**self).verify(owner, message, signature)
    }
}

impl<T: SignatureVerifier + ?Sized> SignatureVerifier for std::sync::Arc<T> {
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
        (**self).verify(owner, message, signature)
    }
}

/// Mock verifier for testing.
///
/// In `Strict` mode a signature is valid iff it equals `owner || message`
/// (see `mock_sign`), so it is bound to both key and message without real
/// curve arithmetic.
#[cfg(test)]
pub struct MockVerifier {
    mode: MockMode,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockMode {
    Strict,
    AcceptAll,
    RejectAll,
}

#[cfg(test)]
impl MockVerifier {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn strict() -> Self {
        Self::new(MockMode::Strict)
    }

    pub fn accept_all() -> Self {
        Self::new(MockMode::AcceptAll)
    }

    pub fn reject_all() -> Self {
        Self::new(MockMode::RejectAll)
    }

    /// Number of `verify` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Produces the signature `MockVerifier` accepts in `Strict` mode.
#[cfg(test)]
pub fn mock_sign(owner: &PublicKey, message: &[u8]) -> Vec<u8> {
    let mut sig = owner.to_vec();
    sig.extend_from_slice(message);
    sig
}

#[cfg(test)]
impl SignatureVerifier for MockVerifier {
    fn verify(&self, owner: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match self.mode {
            MockMode::Strict => signature == mock_sign(owner, message).as_slice(),
            MockMode::AcceptAll => true,
            MockMode::RejectAll => false,
        }
    }
}

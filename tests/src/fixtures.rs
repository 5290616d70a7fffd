//! # Test Fixtures
//!
//! Deterministic Ed25519 wallets and funding pools shared by the
//! integration tests and the benchmarks.

use shared_crypto::Ed25519KeyPair;
use shared_types::{Amount, Hash, OutputRef, PublicKey, Transaction, TransactionBuilder};
use utxo_ledger::{Output, UtxoPool};

/// Hash of the pseudo-transaction that created every genesis output.
pub const GENESIS_HASH: Hash = [0x6e; 32];

/// A named key pair.
pub struct Wallet {
    pub name: &'static str,
    pub keys: Ed25519KeyPair,
}

impl Wallet {
    /// Deterministic wallet derived from a one-byte seed.
    pub fn seeded(name: &'static str, seed: u8) -> Self {
        Self {
            name,
            keys: Ed25519KeyPair::from_seed([seed; 32]),
        }
    }

    /// Owner key for outputs paid to this wallet.
    pub fn owner(&self) -> PublicKey {
        self.keys.owner()
    }

    /// Signature bytes over `message`.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.keys.sign(message).to_vec()
    }
}

/// Alice, Bob and Carol.
pub fn wallets() -> (Wallet, Wallet, Wallet) {
    (
        Wallet::seeded("alice", 0xA1),
        Wallet::seeded("bob", 0xB0),
        Wallet::seeded("carol", 0xC0),
    )
}

/// Reference to the `index`-th genesis output.
pub fn genesis_ref(index: u32) -> OutputRef {
    OutputRef::new(GENESIS_HASH, index)
}

/// Pool holding one genesis output per allocation, in order.
pub fn funding_pool(allocations: &[(&Wallet, Amount)]) -> UtxoPool {
    (0u32..)
        .zip(allocations)
        .map(|(index, (wallet, value))| (genesis_ref(index), Output::new(*value, wallet.owner())))
        .collect()
}

/// Finalize `builder` with input `i` signed by `signers[i]`.
///
/// Inputs without a matching signer stay unsigned.
pub fn signed(builder: TransactionBuilder, signers: &[&Wallet]) -> Transaction {
    builder
        .sign_with(|index, message| {
            signers
                .get(index)
                .map(|wallet| wallet.sign(message))
                .unwrap_or_default()
        })
        .build_finalized()
}

/// Single-input payment from `from` spending `outpoint`.
pub fn pay(from: &Wallet, outpoint: OutputRef, outputs: &[(Amount, PublicKey)]) -> Transaction {
    let builder = outputs
        .iter()
        .fold(TransactionBuilder::new().spend(outpoint), |b, (value, owner)| {
            b.output(*value, *owner)
        });
    signed(builder, &[from])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallets_are_deterministic_and_distinct() {
        let (alice, bob, _) = wallets();
        assert_eq!(alice.owner(), Wallet::seeded("alice", 0xA1).owner());
        assert_ne!(alice.owner(), bob.owner());
    }

    #[test]
    fn test_funding_pool_layout() {
        let (alice, bob, _) = wallets();
        let pool = funding_pool(&[(&alice, 10), (&bob, 20)]);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(&genesis_ref(1)).map(|o| o.owner), Some(bob.owner()));
        assert_eq!(pool.total_value(), 30);
    }
}

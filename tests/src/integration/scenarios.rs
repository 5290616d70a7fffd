//! # Batch Scenarios
//!
//! Ordering-dependent batches and randomized batches checked against the
//! ledger's conservation and double-spend guarantees.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::fixtures::{funding_pool, genesis_ref, pay, signed, wallets, Wallet};
    use shared_crypto::Ed25519KeyPair;
    use shared_types::{Amount, OutputRef, Transaction, TransactionBuilder};
    use utxo_ledger::{
        commit, Ed25519Verifier, EpochProcessor, EpochReport, Rejection, SpendScope, TxHandler,
        TxHandlerApi, UtxoPool,
    };

    // =============================================================================
    // ORDERING
    // =============================================================================

    #[test]
    fn test_funding_and_spender_in_one_batch() {
        let (alice, bob, carol) = wallets();
        let mut pool = funding_pool(&[(&alice, 50)]);

        let a = pay(&alice, genesis_ref(0), &[(50, bob.owner())]);
        let b = pay(&bob, a.output_ref(0), &[(30, carol.owner()), (20, bob.owner())]);

        let accepted = commit(&mut pool, &[a.clone(), b.clone()], &Ed25519Verifier);

        assert_eq!(accepted, vec![a.clone(), b.clone()]);
        assert!(!pool.contains(&genesis_ref(0)));
        assert!(!pool.contains(&a.output_ref(0)));
        assert!(pool.contains(&b.output_ref(0)));
        assert!(pool.contains(&b.output_ref(1)));
    }

    #[test]
    fn test_conflicting_spends_first_wins_either_order() {
        let (alice, bob, carol) = wallets();
        let to_bob = pay(&alice, genesis_ref(0), &[(50, bob.owner())]);
        let to_carol = pay(&alice, genesis_ref(0), &[(50, carol.owner())]);

        for (first, second) in [(&to_bob, &to_carol), (&to_carol, &to_bob)] {
            let mut pool = funding_pool(&[(&alice, 50)]);
            let accepted = commit(&mut pool, &[first.clone(), second.clone()], &Ed25519Verifier);

            assert_eq!(accepted, vec![first.clone()]);
            assert!(pool.contains(&first.output_ref(0)));
            assert!(!pool.contains(&second.output_ref(0)));
        }
    }

    #[test]
    fn test_conflict_on_in_batch_output() {
        let (alice, bob, carol) = wallets();
        let mut handler = TxHandler::new(&funding_pool(&[(&alice, 50)]), Ed25519Verifier);

        let a = pay(&alice, genesis_ref(0), &[(50, bob.owner())]);
        let b1 = pay(&bob, a.output_ref(0), &[(50, carol.owner())]);
        let b2 = pay(&bob, a.output_ref(0), &[(25, bob.owner())]);

        let report = handler.handle_epoch(&[a.clone(), b1.clone(), b2]);

        assert_eq!(report.accepted, vec![a, b1]);
        assert!(matches!(
            report.rejection_at(2),
            Some(Rejection::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_batch_with_intra_transaction_double_spend() {
        let (alice, bob, _) = wallets();
        let mut pool = funding_pool(&[(&alice, 10)]);
        let dup = signed(
            TransactionBuilder::new()
                .spend(genesis_ref(0))
                .spend(genesis_ref(0))
                .output(20, bob.owner()),
            &[&alice, &alice],
        );

        let report = EpochProcessor::default().process(&mut pool, &[dup], &Ed25519Verifier, 1);

        assert_eq!(
            report.rejection_at(0),
            Some(&Rejection::DoubleSpend {
                input_index: 1,
                outpoint: genesis_ref(0),
                scope: SpendScope::WithinTransaction,
            })
        );
        assert_eq!(pool.total_value(), 10);
    }

    // =============================================================================
    // RANDOMIZED BATCHES
    // =============================================================================

    struct RandomBatch {
        wallets: Vec<Wallet>,
        pool: UtxoPool,
        candidates: Vec<Transaction>,
    }

    /// Random batch with chains, conflicts, forged signatures and inflating
    /// outputs mixed in.
    fn random_batch(seed: u64, size: usize) -> RandomBatch {
        let mut rng = StdRng::seed_from_u64(seed);
        let wallets: Vec<Wallet> = (0..6)
            .map(|_| Wallet {
                name: "random",
                keys: Ed25519KeyPair::generate_from(&mut rng),
            })
            .collect();

        let allocations: Vec<(&Wallet, Amount)> = wallets
            .iter()
            .map(|w| (w, rng.gen_range(1..=1_000)))
            .collect();
        let pool = funding_pool(&allocations);

        // (reference, value, owner wallet index) of every output seen so far
        let mut known: Vec<(OutputRef, Amount, usize)> = (0u32..)
            .zip(&allocations)
            .zip(0usize..)
            .map(|((index, (_, value)), owner)| (genesis_ref(index), *value, owner))
            .collect();

        let mut candidates = Vec::with_capacity(size);
        for _ in 0..size {
            let mut builder = TransactionBuilder::new();
            let mut signers = Vec::new();
            let mut input_total: Amount = 0;

            for _ in 0..rng.gen_range(1..=2) {
                let (outpoint, value, owner) = known[rng.gen_range(0..known.len())];
                builder = builder.spend(outpoint);
                input_total += value;
                let signer = if rng.gen_bool(0.9) {
                    owner
                } else {
                    rng.gen_range(0..wallets.len())
                };
                signers.push(&wallets[signer]);
            }

            let target = if rng.gen_bool(0.15) {
                input_total + 1
            } else {
                rng.gen_range(0..=input_total)
            };
            let recipients: Vec<usize> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(0..wallets.len()))
                .collect();
            let mut remaining = target;
            for (n, recipient) in recipients.iter().enumerate() {
                let value = if n + 1 == recipients.len() {
                    remaining
                } else {
                    rng.gen_range(0..=remaining)
                };
                remaining -= value;
                builder = builder.output(value, wallets[*recipient].owner());
            }

            let tx = signed(builder, &signers);
            for (index, (output, recipient)) in (0u32..).zip(tx.outputs.iter().zip(&recipients)) {
                known.push((tx.output_ref(index), output.value, *recipient));
            }
            candidates.push(tx);
        }

        RandomBatch {
            wallets,
            pool,
            candidates,
        }
    }

    fn run(pool: &UtxoPool, candidates: &[Transaction]) -> (EpochReport, UtxoPool) {
        let mut handler = TxHandler::new(pool, Ed25519Verifier);
        let report = handler.handle_epoch(candidates);
        (report, handler.into_pool())
    }

    #[test]
    fn test_random_batches_conserve_value() {
        for seed in 0..8 {
            let batch = random_batch(seed, 40);
            let (report, after) = run(&batch.pool, &batch.candidates);

            assert!(
                after.total_value() <= batch.pool.total_value(),
                "seed {seed}: value created"
            );
            assert_eq!(report.accepted.len() + report.rejected.len(), report.candidates);
        }
    }

    #[test]
    fn test_random_batches_never_double_spend() {
        for seed in 0..8 {
            let batch = random_batch(seed, 40);
            let (report, _) = run(&batch.pool, &batch.candidates);

            let mut spent = HashSet::new();
            for tx in &report.accepted {
                for input in &tx.inputs {
                    assert!(
                        spent.insert(input.outpoint()),
                        "seed {seed}: {} spent twice",
                        input.outpoint()
                    );
                }
            }
        }
    }

    #[test]
    fn test_random_batches_accepted_subset_replays_cleanly() {
        for seed in 0..8 {
            let batch = random_batch(seed, 40);
            let (report, after) = run(&batch.pool, &batch.candidates);

            // The accepted subset alone, in order, is accepted in full and
            // yields the same pool.
            let (replay, replay_after) = run(&batch.pool, &report.accepted);
            assert_eq!(replay.accepted, report.accepted, "seed {seed}");
            assert_eq!(replay_after, after, "seed {seed}");
        }
    }

    #[test]
    fn test_random_batches_are_deterministic() {
        let batch = random_batch(42, 60);
        let (first, first_pool) = run(&batch.pool, &batch.candidates);
        let (second, second_pool) = run(&batch.pool, &batch.candidates);

        assert_eq!(first, second);
        assert_eq!(first_pool, second_pool);
        assert_eq!(batch.wallets.len(), 6);
    }
}

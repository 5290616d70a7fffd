//! # UTXO Ledger Benchmarks
//!
//! | Operation | Work per candidate |
//! |-----------|--------------------|
//! | `validate` | one pool lookup and one Ed25519 verify per input |
//! | `EpochProcessor::process` | `validate` plus O(inputs + outputs) pool updates |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_crypto::Ed25519KeyPair;
use shared_types::{OutputRef, Transaction, TransactionBuilder};
use utxo_ledger::{validate, Ed25519Verifier, EpochProcessor, Output, UtxoPool};

const GENESIS: [u8; 32] = [0x6e; 32];

/// Pool of `size` outputs owned by `keys` and one spender per output.
fn independent_batch(keys: &Ed25519KeyPair, size: u32) -> (UtxoPool, Vec<Transaction>) {
    let pool: UtxoPool = (0..size)
        .map(|i| (OutputRef::new(GENESIS, i), Output::new(1_000, keys.owner())))
        .collect();

    let candidates = (0..size)
        .map(|i| {
            TransactionBuilder::new()
                .input(GENESIS, i)
                .output(600, keys.owner())
                .output(400, keys.owner())
                .sign_with(|_, message| keys.sign(message).to_vec())
                .build_finalized()
        })
        .collect();

    (pool, candidates)
}

/// A chain of `length` transactions, each spending the previous one's output.
fn chained_batch(keys: &Ed25519KeyPair, length: usize) -> (UtxoPool, Vec<Transaction>) {
    let pool: UtxoPool = [(OutputRef::new(GENESIS, 0), Output::new(1_000_000, keys.owner()))]
        .into_iter()
        .collect();

    let mut candidates: Vec<Transaction> = Vec::with_capacity(length);
    let mut previous = OutputRef::new(GENESIS, 0);
    for _ in 0..length {
        let tx = TransactionBuilder::new()
            .spend(previous)
            .output(1_000_000, keys.owner())
            .sign_with(|_, message| keys.sign(message).to_vec())
            .build_finalized();
        previous = tx.output_ref(0);
        candidates.push(tx);
    }

    (pool, candidates)
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("utxo-ledger-validate");
    let keys = Ed25519KeyPair::from_seed([0x42; 32]);
    let (pool, candidates) = independent_batch(&keys, 1);

    group.bench_function("single_input_two_outputs", |b| {
        b.iter(|| black_box(validate(&pool, &candidates[0], &Ed25519Verifier).is_ok()))
    });

    group.finish();
}

fn bench_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("utxo-ledger-epoch");
    let keys = Ed25519KeyPair::from_seed([0x42; 32]);
    let processor = EpochProcessor::default();

    for size in [10u32, 100, 1_000] {
        let (pool, candidates) = independent_batch(&keys, size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("independent", size), &size, |b, _| {
            b.iter(|| {
                let mut working = pool.clone();
                black_box(processor.process(&mut working, &candidates, &Ed25519Verifier, 1))
            })
        });
    }

    for length in [10usize, 100] {
        let (pool, candidates) = chained_batch(&keys, length);
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::new("chained", length), &length, |b, _| {
            b.iter(|| {
                let mut working = pool.clone();
                black_box(processor.process(&mut working, &candidates, &Ed25519Verifier, 1))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_epoch);
criterion_main!(benches);

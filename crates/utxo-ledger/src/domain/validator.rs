//! # Transaction Validator
//!
//! The single-transaction validity predicate over a given pool.
//!
//! A transaction is accepted iff:
//! 1. every input claims an output present in the pool,
//! 2. no output is claimed by two inputs of the transaction,
//! 3. every input's signature verifies under the claimed output's owner,
//!    over `Transaction::raw_data_to_sign(i)`,
//! 4. every output value is non-negative,
//! 5. the input total is at least the output total.
//!
//! Validation reads the pool and calls the oracle, nothing else. It is safe
//! to call repeatedly and speculatively.

use std::collections::HashSet;

use super::entities::Transaction;
use super::errors::{Rejection, SpendScope};
use super::pool::UtxoPool;
use super::value_objects::ValidationSummary;
use crate::ports::outbound::SignatureVerifier;

/// Validate `tx` against `pool`, returning the totals or the first failure.
///
/// Inputs are scanned in order; the first failing check decides the reason.
pub fn validate<V>(
    pool: &UtxoPool,
    tx: &Transaction,
    verifier: &V,
) -> Result<ValidationSummary, Rejection>
where
    V: SignatureVerifier + ?Sized,
{
    let mut claimed = HashSet::with_capacity(tx.inputs.len());
    let mut input_total: i128 = 0;

    for (input_index, input) in tx.inputs.iter().enumerate() {
        let outpoint = input.outpoint();

        let output = pool.get(&outpoint).ok_or(Rejection::InvalidReference {
            input_index,
            outpoint,
        })?;

        if !claimed.insert(outpoint) {
            return Err(Rejection::DoubleSpend {
                input_index,
                outpoint,
                scope: SpendScope::WithinTransaction,
            });
        }

        let message = tx
            .raw_data_to_sign(input_index)
            .map_err(|_| Rejection::SignatureInvalid { input_index })?;
        if !verifier.verify(&output.owner, &message, &input.signature) {
            return Err(Rejection::SignatureInvalid { input_index });
        }

        input_total += i128::from(output.value);
    }

    let mut output_total: i128 = 0;
    for (output_index, output) in tx.outputs.iter().enumerate() {
        if output.value < 0 {
            return Err(Rejection::NegativeOutputValue {
                output_index,
                value: output.value,
            });
        }
        output_total += i128::from(output.value);
    }

    if input_total < output_total {
        return Err(Rejection::ValueImbalance {
            inputs: input_total,
            outputs: output_total,
        });
    }

    Ok(ValidationSummary {
        input_total,
        output_total,
    })
}

/// Boolean form of `validate`.
pub fn is_valid<V>(pool: &UtxoPool, tx: &Transaction, verifier: &V) -> bool
where
    V: SignatureVerifier + ?Sized,
{
    validate(pool, tx, verifier).is_ok()
}

//! # Rejection Reasons
//!
//! Every way a candidate transaction can fail. These are rejections, not
//! faults: the validator reports them as `Err`, the epoch processor reports
//! them as absence from the accepted set. Neither ever panics on well-typed
//! input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Amount, OutputRef};

/// Where a duplicate claim was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendScope {
    /// Two inputs of the same transaction claim the output.
    WithinTransaction,
    /// A transaction accepted earlier in this epoch already claimed the output.
    WithinEpoch,
}

/// Why a candidate transaction was not accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The claimed output is not in the unspent-output pool.
    #[error("Input {input_index} references unknown or spent output {outpoint}")]
    InvalidReference {
        input_index: usize,
        outpoint: OutputRef,
    },

    /// The claimed output is claimed more than once.
    #[error("Input {input_index} double-spends output {outpoint} ({scope:?})")]
    DoubleSpend {
        input_index: usize,
        outpoint: OutputRef,
        scope: SpendScope,
    },

    /// The input's signature does not verify under the output owner's key.
    #[error("Signature on input {input_index} does not verify")]
    SignatureInvalid { input_index: usize },

    /// A declared output value is below zero.
    #[error("Output {output_index} has negative value {value}")]
    NegativeOutputValue { output_index: usize, value: Amount },

    /// Outputs would create value.
    #[error("Outputs total {outputs} exceeds inputs total {inputs}")]
    ValueImbalance { inputs: i128, outputs: i128 },

    /// The claimed output was created in the current epoch while same-epoch
    /// chaining is disabled.
    #[error("Input {input_index} spends output {outpoint} created in this epoch")]
    UnconfirmedInput {
        input_index: usize,
        outpoint: OutputRef,
    },

    /// The candidate arrived after the per-epoch limit was reached.
    #[error("Candidate at position {position} exceeds batch limit {limit}")]
    BatchLimitExceeded { position: usize, limit: usize },
}

impl Rejection {
    /// Short stable label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidReference { .. } => "invalid_reference",
            Self::DoubleSpend { .. } => "double_spend",
            Self::SignatureInvalid { .. } => "signature_invalid",
            Self::NegativeOutputValue { .. } => "negative_output_value",
            Self::ValueImbalance { .. } => "value_imbalance",
            Self::UnconfirmedInput { .. } => "unconfirmed_input",
            Self::BatchLimitExceeded { .. } => "batch_limit_exceeded",
        }
    }
}

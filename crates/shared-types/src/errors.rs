//! # Error Types
//!
//! Errors raised when a transaction record is edited out of bounds.

use thiserror::Error;

/// Errors that can occur while assembling a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Input index does not exist in the transaction.
    #[error("Input index {index} out of range ({len} inputs)")]
    InputIndexOutOfRange { index: usize, len: usize },
}

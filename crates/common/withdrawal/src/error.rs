use thiserror::Error;

use crate::policy::WithdrawalRejection;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Amount must be a finite number, got {0}")]
    NonFinite(f64),

    #[error("Amount must not be negative, got {0}")]
    Negative(f64),

    #[error("Amount {value} does not fit in {unit}")]
    Overflow { value: String, unit: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("Invalid validator pubkey length: {actual}. Expected {expected} hex characters.")]
    InvalidPubkeyLength { actual: usize, expected: usize },

    #[error("Invalid withdrawal data length: {actual}. Expected {expected} hex characters.")]
    InvalidPayloadLength { actual: usize, expected: usize },

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Raised when the withdrawal policy is handed values it cannot reason about.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountInputError {
    #[error("Amount is required")]
    AmountRequired,

    #[error("Invalid number format: {input}")]
    UnparseableAmount { input: String },

    #[error("Amount must be greater than 0")]
    NonPositiveAmount { input: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WithdrawalError {
    #[error(transparent)]
    Input(#[from] AmountInputError),

    #[error(transparent)]
    Rejected(#[from] WithdrawalRejection),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(
        "Partial withdrawal of {amount_eth} ETH is below 1 Gwei and would be encoded as a full exit"
    )]
    SubGweiPartialAmount { amount_eth: f64 },
}

impl From<UnitError> for WithdrawalError {
    fn from(err: UnitError) -> Self {
        WithdrawalError::Codec(CodecError::Unit(err))
    }
}

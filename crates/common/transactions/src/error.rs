use alloy_primitives::B256;
use thiserror::Error;

use crate::transaction::TransactionStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Transaction not found: {0}")]
    NotFound(B256),

    #[error("Transaction already recorded: {0}")]
    AlreadyRecorded(B256),

    #[error("Transaction {hash} cannot move from {from} to {to}")]
    InvalidTransition {
        hash: B256,
        from: TransactionStatus,
        to: TransactionStatus,
    },
}

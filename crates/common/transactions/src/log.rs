use std::collections::VecDeque;

use alloy_primitives::B256;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::{
    error::TransactionError,
    transaction::{TransactionUpdate, WithdrawalTransaction},
};

#[derive(Debug, Default)]
struct TransactionLogState {
    /// Newest first.
    history: VecDeque<WithdrawalTransaction>,
    pending: Vec<B256>,
}

/// Withdrawal transactions submitted during this session. Nothing is persisted.
///
/// History is unbounded and only shrinks through [TransactionLog::clear_history], which keeps
/// transactions that are still pending.
#[derive(Debug, Default)]
pub struct TransactionLog {
    state: RwLock<TransactionLogState>,
}

impl TransactionLog {
    pub fn record(&self, transaction: WithdrawalTransaction) -> Result<(), TransactionError> {
        let mut state = self.state.write();
        if state
            .history
            .iter()
            .any(|recorded| recorded.hash == transaction.hash)
        {
            return Err(TransactionError::AlreadyRecorded(transaction.hash));
        }

        info!(
            "Recording withdrawal transaction {} ({})",
            transaction.hash, transaction.status
        );
        if transaction.status.is_pending() {
            state.pending.push(transaction.hash);
        }
        state.history.push_front(transaction);
        Ok(())
    }

    pub fn update(
        &self,
        hash: B256,
        update: TransactionUpdate,
    ) -> Result<WithdrawalTransaction, TransactionError> {
        let mut state = self.state.write();
        let transaction = state
            .history
            .iter_mut()
            .find(|transaction| transaction.hash == hash)
            .ok_or(TransactionError::NotFound(hash))?;

        if let Some(status) = update.status {
            if !transaction.status.can_transition_to(status) {
                return Err(TransactionError::InvalidTransition {
                    hash,
                    from: transaction.status,
                    to: status,
                });
            }
            transaction.status = status;
        }
        if let Some(confirmations) = update.confirmations {
            transaction.confirmations = Some(confirmations);
        }
        if let Some(error) = update.error {
            transaction.error = Some(error);
        }

        let updated = transaction.clone();
        if !updated.status.is_pending() {
            state.pending.retain(|pending_hash| *pending_hash != hash);
        }
        debug!("Updated transaction {hash}: status {}", updated.status);
        Ok(updated)
    }

    pub fn get(&self, hash: &B256) -> Option<WithdrawalTransaction> {
        self.state
            .read()
            .history
            .iter()
            .find(|transaction| transaction.hash == *hash)
            .cloned()
    }

    pub fn history(&self) -> Vec<WithdrawalTransaction> {
        self.state.read().history.iter().cloned().collect()
    }

    pub fn pending(&self) -> Vec<WithdrawalTransaction> {
        let state = self.state.read();
        state
            .pending
            .iter()
            .filter_map(|hash| {
                state
                    .history
                    .iter()
                    .find(|transaction| transaction.hash == *hash)
                    .cloned()
            })
            .collect()
    }

    /// Drops the history. Transactions still pending keep being tracked.
    pub fn clear_history(&self) {
        let mut state = self.state.write();
        let TransactionLogState { history, pending } = &mut *state;
        history.retain(|transaction| pending.contains(&transaction.hash));
    }
}

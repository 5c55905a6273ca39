use egress_transactions::transaction::WithdrawalTransaction;
use egress_withdrawal::validator::Validator;
use serde::{Deserialize, Serialize};

/// # Example
/// {
///  "validators": [Validator]
/// }
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValidatorsResponse {
    pub validators: Vec<Validator>,
}

impl ValidatorsResponse {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }
}

/// A transaction together with the block explorer page for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    #[serde(flatten)]
    pub transaction: WithdrawalTransaction,
    pub explorer_url: String,
}

impl From<WithdrawalTransaction> for TransactionResponse {
    fn from(transaction: WithdrawalTransaction) -> Self {
        let explorer_url = transaction
            .network
            .spec()
            .block_explorer_tx_url(&transaction.hash.to_string());
        Self {
            transaction,
            explorer_url,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub history: Vec<TransactionResponse>,
    pub pending: Vec<TransactionResponse>,
}

impl TransactionsResponse {
    pub fn new(history: Vec<WithdrawalTransaction>, pending: Vec<WithdrawalTransaction>) -> Self {
        Self {
            history: history.into_iter().map(Into::into).collect(),
            pending: pending.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use egress_network_spec::networks::Network;
    use egress_transactions::transaction::TransactionStatus;
    use egress_withdrawal::validator::ValidatorPubkey;

    use super::*;

    #[test]
    fn test_transaction_response_links_explorer() {
        let transaction = WithdrawalTransaction {
            hash: B256::repeat_byte(0xcd),
            validator_pubkey: ValidatorPubkey::repeat_byte(0x01),
            amount_eth: 0.0,
            is_full: true,
            status: TransactionStatus::Confirmed,
            timestamp: 1,
            confirmations: Some(12),
            error: None,
            network: Network::Hoodi,
        };

        let value =
            serde_json::to_value(TransactionResponse::from(transaction)).expect("serialize");
        assert_eq!(
            value["explorerUrl"],
            format!("https://hoodi.etherscan.io/tx/0x{}", "cd".repeat(32))
        );
        assert_eq!(value["status"], "confirmed");
        assert_eq!(value["confirmations"], 12);
        assert_eq!(value["isFull"], true);
    }
}

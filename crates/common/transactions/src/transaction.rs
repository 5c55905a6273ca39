use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use alloy_primitives::B256;
use egress_network_spec::networks::Network;
use egress_withdrawal::{validator::ValidatorPubkey, withdrawal::ValidatorWithdrawal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

impl TransactionStatus {
    /// Status only moves forward: pending may settle as confirmed or failed, settled
    /// transactions stay settled.
    pub fn can_transition_to(self, next: TransactionStatus) -> bool {
        self == next || self == TransactionStatus::Pending
    }

    pub fn is_pending(self) -> bool {
        self == TransactionStatus::Pending
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Confirmed => write!(f, "confirmed"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalTransaction {
    pub hash: B256,
    pub validator_pubkey: ValidatorPubkey,
    #[serde(rename = "amountETH")]
    pub amount_eth: f64,
    pub is_full: bool,
    pub status: TransactionStatus,
    /// Milliseconds since the unix epoch.
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub network: Network,
}

impl WithdrawalTransaction {
    /// A freshly broadcast transaction.
    pub fn new_pending(
        hash: B256,
        validator_pubkey: ValidatorPubkey,
        amount_eth: f64,
        is_full: bool,
        network: Network,
    ) -> Self {
        Self {
            hash,
            validator_pubkey,
            amount_eth,
            is_full,
            status: TransactionStatus::Pending,
            timestamp: now_millis(),
            confirmations: None,
            error: None,
            network,
        }
    }

    pub fn pending(hash: B256, withdrawal: &ValidatorWithdrawal, network: Network) -> Self {
        Self::new_pending(
            hash,
            withdrawal.validator.pubkey,
            withdrawal.amount_eth,
            withdrawal.is_full,
            network,
        )
    }
}

/// Partial update merged into a recorded transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub confirmations: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_moves_forward_only() {
        use TransactionStatus::{Confirmed, Failed, Pending};

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Failed));
        assert!(Pending.can_transition_to(Pending));
        assert!(Confirmed.can_transition_to(Confirmed));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Pending));
        assert!(!Failed.can_transition_to(Confirmed));
    }

    #[test]
    fn test_transaction_json() {
        let transaction = WithdrawalTransaction {
            hash: B256::repeat_byte(0x01),
            validator_pubkey: ValidatorPubkey::repeat_byte(0x02),
            amount_eth: 1.5,
            is_full: false,
            status: TransactionStatus::Pending,
            timestamp: 1_700_000_000_000,
            confirmations: None,
            error: None,
            network: Network::Hoodi,
        };
        let value = serde_json::to_value(&transaction).expect("serialize");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["amountETH"], 1.5);
        assert_eq!(value["network"], "hoodi");
        assert!(value.get("confirmations").is_none());

        let parsed: WithdrawalTransaction = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed, transaction);
    }

    #[test]
    fn test_pending_from_withdrawal() {
        use alloy_primitives::U256;
        use egress_network_spec::networks::MAINNET;
        use egress_withdrawal::{
            validator::{Validator, ValidatorState},
            withdrawal::WithdrawalAmount,
        };

        let validator = Validator::new(
            ValidatorPubkey::repeat_byte(0x07),
            ValidatorState::Active,
            U256::from(34_000_000_000_000_000_000u128),
            U256::from(32_000_000_000_000_000_000u128),
        );
        let withdrawal =
            ValidatorWithdrawal::prepare(validator, WithdrawalAmount::Partial(2.0), &MAINNET)
                .expect("valid withdrawal");

        let transaction = WithdrawalTransaction::pending(B256::ZERO, &withdrawal, Network::Mainnet);
        assert_eq!(transaction.status, TransactionStatus::Pending);
        assert_eq!(transaction.validator_pubkey, ValidatorPubkey::repeat_byte(0x07));
        assert_eq!(transaction.amount_eth, 2.0);
        assert!(!transaction.is_full);
        assert!(transaction.timestamp > 0);
    }

    #[test]
    fn test_update_from_partial_json() {
        let update: TransactionUpdate =
            serde_json::from_str(r#"{"confirmations": 3}"#).expect("deserialize");
        assert_eq!(
            update,
            TransactionUpdate {
                confirmations: Some(3),
                ..Default::default()
            }
        );
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validator lifecycle as reported by the Kiln stakes API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KilnStakeState {
    ActiveOngoing,
    ActiveSlashing,
    PendingInitialized,
    PendingQueued,
    ExitedUnslashed,
    ExitedSlashed,
    WithdrawalPossible,
    WithdrawalDone,
    DepositInProgress,
    /// A state this client does not know about yet.
    Unknown(String),
}

impl KilnStakeState {
    pub fn as_str(&self) -> &str {
        match self {
            KilnStakeState::ActiveOngoing => "active_ongoing",
            KilnStakeState::ActiveSlashing => "active_slashing",
            KilnStakeState::PendingInitialized => "pending_initialized",
            KilnStakeState::PendingQueued => "pending_queued",
            KilnStakeState::ExitedUnslashed => "exited_unslashed",
            KilnStakeState::ExitedSlashed => "exited_slashed",
            KilnStakeState::WithdrawalPossible => "withdrawal_possible",
            KilnStakeState::WithdrawalDone => "withdrawal_done",
            KilnStakeState::DepositInProgress => "deposit_in_progress",
            KilnStakeState::Unknown(state) => state,
        }
    }
}

impl From<String> for KilnStakeState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "active_ongoing" => KilnStakeState::ActiveOngoing,
            "active_slashing" => KilnStakeState::ActiveSlashing,
            "pending_initialized" => KilnStakeState::PendingInitialized,
            "pending_queued" => KilnStakeState::PendingQueued,
            "exited_unslashed" => KilnStakeState::ExitedUnslashed,
            "exited_slashed" => KilnStakeState::ExitedSlashed,
            "withdrawal_possible" => KilnStakeState::WithdrawalPossible,
            "withdrawal_done" => KilnStakeState::WithdrawalDone,
            "deposit_in_progress" => KilnStakeState::DepositInProgress,
            _ => KilnStakeState::Unknown(state),
        }
    }
}

impl From<KilnStakeState> for String {
    fn from(state: KilnStakeState) -> Self {
        match state {
            KilnStakeState::Unknown(state) => state,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for KilnStakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `GET /eth/stakes`. Only the fields the dashboard reads are typed, the rest of
/// the record is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KilnStake {
    /// The validator's BLS public key, despite the name.
    pub validator_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator_index: Option<u64>,
    pub state: KilnStakeState,
    /// Wei, as a decimal string. Absent while the deposit is still being processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_epoch: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exited_epoch: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_credentials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_requested: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KilnPageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KilnValidatorsResponse {
    pub data: Vec<KilnStake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<KilnPageMeta>,
}

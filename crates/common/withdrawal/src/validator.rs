use alloy_primitives::{FixedBytes, U256};
use serde::{Deserialize, Serialize};

use crate::{constants::WITHDRAWABLE_BALANCE_FLOOR_ETH, misc::quoted_u256, units::wei_to_eth};

pub type ValidatorPubkey = FixedBytes<48>;

/// Coarse lifecycle of a validator as shown to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorState {
    Active,
    Pending,
    Exited,
    Slashed,
}

/// A validator owned by the connected wallet.
///
/// `balance` and `effective_balance` are exact wei amounts. The `*_eth` fields are derived from
/// them for display and are recomputed whenever a [Validator] is deserialized, so a client can
/// not hand back display values that disagree with the balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ValidatorRecord")]
pub struct Validator {
    pub pubkey: ValidatorPubkey,
    pub state: ValidatorState,
    #[serde(with = "quoted_u256")]
    pub balance: U256,
    #[serde(with = "quoted_u256")]
    pub effective_balance: U256,
    #[serde(rename = "balanceETH")]
    pub balance_eth: f64,
    #[serde(rename = "effectiveBalanceETH")]
    pub effective_balance_eth: f64,
    #[serde(rename = "maxWithdrawableETH")]
    pub max_withdrawable_eth: f64,
}

impl Validator {
    pub fn new(
        pubkey: ValidatorPubkey,
        state: ValidatorState,
        balance: U256,
        effective_balance: U256,
    ) -> Self {
        let balance_eth = wei_to_eth(balance);
        Self {
            pubkey,
            state,
            balance,
            effective_balance,
            balance_eth,
            effective_balance_eth: wei_to_eth(effective_balance),
            max_withdrawable_eth: (balance_eth - WITHDRAWABLE_BALANCE_FLOOR_ETH).max(0.0),
        }
    }
}

/// Wire form of a [Validator]; only the exact fields are read back.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidatorRecord {
    pubkey: ValidatorPubkey,
    state: ValidatorState,
    #[serde(with = "quoted_u256")]
    balance: U256,
    #[serde(with = "quoted_u256")]
    effective_balance: U256,
}

impl From<ValidatorRecord> for Validator {
    fn from(record: ValidatorRecord) -> Self {
        Validator::new(
            record.pubkey,
            record.state,
            record.balance,
            record.effective_balance,
        )
    }
}

//! Turns Kiln stake records into [Validator]s.
//!
//! The stakes API is best effort from our point of view: a null body, a missing `data` array or
//! a record of the wrong shape never fails the whole request. Such records are skipped.

use alloy_primitives::U256;
use egress_withdrawal::validator::{Validator, ValidatorPubkey, ValidatorState};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::kiln::{KilnStake, KilnStakeState};

pub fn map_stake_state(state: &KilnStakeState) -> ValidatorState {
    match state {
        KilnStakeState::ActiveOngoing | KilnStakeState::ActiveSlashing => ValidatorState::Active,
        KilnStakeState::PendingInitialized
        | KilnStakeState::PendingQueued
        | KilnStakeState::ExitedUnslashed
        | KilnStakeState::WithdrawalPossible
        | KilnStakeState::WithdrawalDone => ValidatorState::Exited,
        KilnStakeState::ExitedSlashed => ValidatorState::Slashed,
        KilnStakeState::DepositInProgress | KilnStakeState::Unknown(_) => ValidatorState::Pending,
    }
}

fn parse_wei(value: &str) -> Option<U256> {
    U256::from_str_radix(value, 10).ok()
}

/// Returns `None` for records that can not be shown yet, most commonly deposits still in
/// progress which carry no balances.
pub fn normalize_stake(stake: &KilnStake) -> Option<Validator> {
    let (Some(balance), Some(effective_balance)) = (
        stake.balance.as_deref().filter(|balance| !balance.is_empty()),
        stake
            .effective_balance
            .as_deref()
            .filter(|balance| !balance.is_empty()),
    ) else {
        debug!(
            "Skipping validator {} without balances (state: {})",
            stake.validator_address, stake.state
        );
        return None;
    };

    let Ok(pubkey) = stake.validator_address.parse::<ValidatorPubkey>() else {
        warn!(
            "Skipping validator with malformed pubkey: {}",
            stake.validator_address
        );
        return None;
    };

    let (Some(balance), Some(effective_balance)) = (parse_wei(balance), parse_wei(effective_balance))
    else {
        warn!(
            "Skipping validator {} with malformed balances: {balance}, {effective_balance}",
            stake.validator_address
        );
        return None;
    };

    Some(Validator::new(
        pubkey,
        map_stake_state(&stake.state),
        balance,
        effective_balance,
    ))
}

/// Normalizes an untyped `GET /eth/stakes` response body.
pub fn normalize_stakes(body: &Value) -> Vec<Validator> {
    let Some(records) = body.get("data").and_then(Value::as_array) else {
        debug!("Kiln response carries no stake data");
        return vec![];
    };

    let validators: Vec<Validator> = records
        .iter()
        .filter(|record| !record.is_null())
        .filter_map(|record| match KilnStake::deserialize(record) {
            Ok(stake) => Some(stake),
            Err(err) => {
                warn!("Skipping malformed stake record: {err}");
                None
            }
        })
        .filter_map(|stake| normalize_stake(&stake))
        .collect();

    debug!(
        "Normalized {} validators out of {} stake records",
        validators.len(),
        records.len()
    );
    validators
}

use alloy_primitives::Address;
use egress_network_spec::networks::NetworkSpec;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    codec::WithdrawalPayload,
    error::WithdrawalError,
    misc::checksummed_address,
    policy::WithdrawalPolicy,
    units::eth_to_gwei,
    validator::Validator,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WithdrawalAmount {
    /// Exit the validator entirely.
    Full,
    /// Withdraw this many ETH, leaving the minimum balance behind.
    Partial(f64),
}

/// A confirmed withdrawal intent, ready to hand to the wallet for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorWithdrawal {
    pub validator: Validator,
    #[serde(rename = "amountETH")]
    pub amount_eth: f64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount_gwei: u64,
    pub is_full: bool,
    /// Withdrawal request predeploy the transaction must be sent to.
    #[serde(with = "checksummed_address")]
    pub to: Address,
    pub transaction_data: WithdrawalPayload,
}

impl ValidatorWithdrawal {
    pub fn prepare(
        validator: Validator,
        amount: WithdrawalAmount,
        network_spec: &NetworkSpec,
    ) -> Result<Self, WithdrawalError> {
        let (amount_eth, transaction_data) = match amount {
            WithdrawalAmount::Full => (0.0, WithdrawalPayload::full_exit(&validator.pubkey)),
            WithdrawalAmount::Partial(amount_eth) => {
                WithdrawalPolicy::from(network_spec)
                    .validate(validator.balance_eth, amount_eth)?
                    .into_result()?;
                let amount_gwei = eth_to_gwei(amount_eth)?;
                if amount_gwei == 0 {
                    return Err(WithdrawalError::SubGweiPartialAmount { amount_eth });
                }
                (
                    amount_eth,
                    WithdrawalPayload::new(&validator.pubkey, amount_gwei),
                )
            }
        };

        let amount_gwei = transaction_data.amount_gwei();
        info!(
            "Prepared {} withdrawal of {amount_gwei} Gwei for validator {} on {}",
            if transaction_data.is_full_exit() { "full" } else { "partial" },
            validator.pubkey,
            network_spec.network,
        );

        Ok(Self {
            validator,
            amount_eth,
            amount_gwei,
            is_full: transaction_data.is_full_exit(),
            to: network_spec.withdrawal_contract_address,
            transaction_data,
        })
    }
}

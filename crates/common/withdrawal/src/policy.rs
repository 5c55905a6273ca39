use egress_network_spec::networks::{MIN_VALIDATOR_BALANCE_ETH, NetworkSpec};
use thiserror::Error;

use crate::error::PolicyError;

/// Reasons a withdrawal is refused. Messages are shown to the end user as is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WithdrawalRejection {
    #[error("Withdrawal amount must be greater than 0")]
    NonPositiveAmount,

    #[error("Cannot withdraw more than current balance ({current_balance} ETH)")]
    InsufficientBalance { current_balance: f64 },

    #[error(
        "Validator must have at least {minimum_balance} ETH remaining. Current: {current_balance} ETH, After withdrawal: {remaining_balance:.4} ETH"
    )]
    BelowMinimumRemaining {
        minimum_balance: f64,
        current_balance: f64,
        remaining_balance: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawalVerdict {
    Valid,
    Invalid(WithdrawalRejection),
}

impl WithdrawalVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, WithdrawalVerdict::Valid)
    }

    pub fn rejection(&self) -> Option<&WithdrawalRejection> {
        match self {
            WithdrawalVerdict::Valid => None,
            WithdrawalVerdict::Invalid(rejection) => Some(rejection),
        }
    }

    pub fn into_result(self) -> Result<(), WithdrawalRejection> {
        match self {
            WithdrawalVerdict::Valid => Ok(()),
            WithdrawalVerdict::Invalid(rejection) => Err(rejection),
        }
    }
}

/// Partial withdrawal rules: a positive amount, covered by the balance, leaving at least
/// `min_balance_eth` behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalPolicy {
    pub min_balance_eth: f64,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            min_balance_eth: MIN_VALIDATOR_BALANCE_ETH,
        }
    }
}

impl From<&NetworkSpec> for WithdrawalPolicy {
    fn from(network_spec: &NetworkSpec) -> Self {
        Self {
            min_balance_eth: network_spec.min_validator_balance_eth,
        }
    }
}

impl WithdrawalPolicy {
    pub fn new(min_balance_eth: f64) -> Self {
        Self { min_balance_eth }
    }

    /// Checks run in order and the first failure is reported.
    pub fn validate(
        &self,
        current_balance_eth: f64,
        withdrawal_amount_eth: f64,
    ) -> Result<WithdrawalVerdict, PolicyError> {
        ensure_finite("current balance", current_balance_eth)?;
        ensure_finite("withdrawal amount", withdrawal_amount_eth)?;
        ensure_finite("minimum balance", self.min_balance_eth)?;

        if withdrawal_amount_eth <= 0.0 {
            return Ok(WithdrawalVerdict::Invalid(
                WithdrawalRejection::NonPositiveAmount,
            ));
        }

        if withdrawal_amount_eth > current_balance_eth {
            return Ok(WithdrawalVerdict::Invalid(
                WithdrawalRejection::InsufficientBalance {
                    current_balance: current_balance_eth,
                },
            ));
        }

        let remaining_balance = current_balance_eth - withdrawal_amount_eth;
        if remaining_balance < self.min_balance_eth {
            return Ok(WithdrawalVerdict::Invalid(
                WithdrawalRejection::BelowMinimumRemaining {
                    minimum_balance: self.min_balance_eth,
                    current_balance: current_balance_eth,
                    remaining_balance,
                },
            ));
        }

        Ok(WithdrawalVerdict::Valid)
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PolicyError::NonFiniteInput { name, value })
    }
}

/// Validates against the default 32 ETH minimum.
pub fn validate_withdrawal(
    current_balance_eth: f64,
    withdrawal_amount_eth: f64,
) -> Result<WithdrawalVerdict, PolicyError> {
    WithdrawalPolicy::default().validate(current_balance_eth, withdrawal_amount_eth)
}

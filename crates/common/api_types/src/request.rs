use alloy_primitives::B256;
use egress_network_spec::networks::{MAINNET_CHAIN_ID, Network};
use egress_transactions::transaction::WithdrawalTransaction;
use egress_withdrawal::{
    error::{AmountInputError, WithdrawalError},
    input::parse_amount_input,
    validator::{Validator, ValidatorPubkey},
    withdrawal::WithdrawalAmount,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub fn network_for_chain_id(chain_id: u64) -> Result<Network, ApiError> {
    Network::from_chain_id(chain_id)
        .ok_or_else(|| ApiError::BadRequest(format!("Unsupported chain ID: {chain_id}")))
}

/// Query string of `GET /api/validators`.
///
/// Both fields are kept as text so that missing or malformed values surface as our own
/// messages instead of actix's generic query error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorsQuery {
    pub address: Option<String>,
    pub chain_id: Option<String>,
}

impl ValidatorsQuery {
    /// Defaults to mainnet when no chain id is given.
    pub fn network(&self) -> Result<Network, ApiError> {
        let Some(chain_id) = self.chain_id.as_deref() else {
            return network_for_chain_id(MAINNET_CHAIN_ID);
        };
        let chain_id = chain_id.trim().parse::<u64>().map_err(|_| {
            ApiError::BadRequest(format!("Unsupported chain ID: {chain_id}"))
        })?;
        network_for_chain_id(chain_id)
    }
}

/// The amount field accepts both what a text input produces and a plain JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequestBody {
    pub validator: Validator,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub full: bool,
    #[serde(default)]
    pub chain_id: Option<u64>,
}

impl WithdrawalRequestBody {
    pub fn network(&self) -> Result<Network, ApiError> {
        network_for_chain_id(self.chain_id.unwrap_or(MAINNET_CHAIN_ID))
    }

    /// `full` wins over any amount that was also sent.
    pub fn withdrawal_amount(&self) -> Result<WithdrawalAmount, WithdrawalError> {
        if self.full {
            return Ok(WithdrawalAmount::Full);
        }
        let amount = match &self.amount {
            None => return Err(AmountInputError::AmountRequired.into()),
            Some(AmountInput::Text(text)) => parse_amount_input(text)?,
            Some(AmountInput::Number(amount)) => {
                if *amount <= 0.0 {
                    return Err(AmountInputError::NonPositiveAmount {
                        input: amount.to_string(),
                    }
                    .into());
                }
                *amount
            }
        };
        Ok(WithdrawalAmount::Partial(amount))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    pub data: String,
}

/// A withdrawal transaction the wallet just broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionRequest {
    pub hash: B256,
    pub validator_pubkey: ValidatorPubkey,
    #[serde(rename = "amountETH")]
    pub amount_eth: f64,
    #[serde(default)]
    pub is_full: bool,
    #[serde(default)]
    pub chain_id: Option<u64>,
}

impl NewTransactionRequest {
    pub fn into_transaction(self) -> Result<WithdrawalTransaction, ApiError> {
        let network = network_for_chain_id(self.chain_id.unwrap_or(MAINNET_CHAIN_ID))?;
        Ok(WithdrawalTransaction::new_pending(
            self.hash,
            self.validator_pubkey,
            self.amount_eth,
            self.is_full,
            network,
        ))
    }
}

use std::sync::Arc;

use clap::Parser;
use egress_network_spec::{
    cli::network_parser,
    networks::{MAINNET, NetworkSpec},
};
use anyhow::bail;
use egress_withdrawal::{codec::encode_withdrawal_data, input::validate_pubkey};
use serde_json::{Value, json};

use crate::cli::constants::DEFAULT_NETWORK;

#[derive(Debug, Parser)]
pub struct EncodeConfig {
    #[arg(long, help = "Validator public key, 96 hex characters with or without 0x")]
    pub pubkey: String,

    #[arg(long, help = "Amount to withdraw in ETH, 0 requests a full exit", default_value_t = 0.0)]
    pub amount: f64,

    #[arg(
        long,
        help = "Choose mainnet or hoodi, by name or chain id",
        default_value = DEFAULT_NETWORK,
        value_parser = network_parser
    )]
    pub network: Arc<NetworkSpec>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            pubkey: String::new(),
            amount: 0.0,
            network: MAINNET.clone(),
        }
    }
}

/// The transaction a wallet has to send for this withdrawal request.
pub fn run_encode(config: &EncodeConfig) -> anyhow::Result<Value> {
    if !validate_pubkey(&config.pubkey) {
        bail!(
            "Invalid validator public key format: {}. Expected 96 hex characters.",
            config.pubkey
        );
    }
    let payload = encode_withdrawal_data(&config.pubkey, config.amount)?;

    Ok(json!({
        "chainId": config.network.chain_id(),
        "to": config.network.withdrawal_contract_address.to_checksum(None),
        "contractUrl": config.network.withdrawal_contract_explorer_url(),
        "data": payload.to_string(),
        "amountGwei": payload.amount_gwei().to_string(),
        "isFull": payload.is_full_exit(),
    }))
}

use std::{sync::Arc, time::Duration};

use alloy_primitives::Address;
use anyhow::anyhow;
use clap::Parser;
use egress_network_spec::{cli::network_parser, networks::NetworkSpec};
use egress_staking::client::KilnApiClient;
use egress_withdrawal::{input::validate_address, validator::Validator};

use crate::cli::{
    constants::{DEFAULT_NETWORK, DEFAULT_REQUEST_TIMEOUT},
    server::{KilnApiKeys, duration_parser},
};

#[derive(Debug, Parser)]
pub struct ValidatorsConfig {
    #[arg(long, help = "Wallet address that owns the validators")]
    pub address: String,

    #[arg(
        long,
        help = "Choose mainnet or hoodi, by name or chain id",
        default_value = DEFAULT_NETWORK,
        value_parser = network_parser
    )]
    pub network: Arc<NetworkSpec>,

    #[arg(long, help = "Set HTTP request timeout for Kiln API calls, in seconds", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[command(flatten)]
    pub kiln_api_keys: KilnApiKeys,
}

impl ValidatorsConfig {
    pub fn wallet(&self) -> anyhow::Result<Address> {
        if !validate_address(&self.address) {
            return Err(anyhow!("Invalid Ethereum address format: {}", self.address));
        }
        Ok(self.address.parse()?)
    }
}

pub async fn run_validators(config: &ValidatorsConfig) -> anyhow::Result<Vec<Validator>> {
    let wallet = config.wallet()?;
    let client = KilnApiClient::new(
        config.network.clone(),
        config.kiln_api_keys.for_network(config.network.network),
        config.request_timeout,
    )?;
    Ok(client.get_validators(&wallet).await?)
}

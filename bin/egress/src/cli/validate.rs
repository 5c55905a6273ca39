use std::sync::Arc;

use clap::Parser;
use egress_network_spec::{cli::network_parser, networks::NetworkSpec};
use egress_withdrawal::policy::{WithdrawalPolicy, WithdrawalVerdict};

use crate::cli::constants::DEFAULT_NETWORK;

#[derive(Debug, Parser)]
pub struct ValidateConfig {
    #[arg(long, help = "Current validator balance in ETH")]
    pub balance: f64,

    #[arg(long, help = "Amount to withdraw in ETH")]
    pub amount: f64,

    #[arg(
        long,
        help = "Choose mainnet or hoodi, by name or chain id",
        default_value = DEFAULT_NETWORK,
        value_parser = network_parser
    )]
    pub network: Arc<NetworkSpec>,
}

pub fn run_validate(config: &ValidateConfig) -> anyhow::Result<WithdrawalVerdict> {
    Ok(WithdrawalPolicy::from(config.network.as_ref()).validate(config.balance, config.amount)?)
}

use clap::Parser;
use egress_withdrawal::codec::{DecodedWithdrawal, decode_withdrawal_data};

#[derive(Debug, Parser)]
pub struct DecodeConfig {
    #[arg(long, help = "Withdrawal request calldata, 112 hex characters with or without 0x")]
    pub data: String,
}

pub fn run_decode(config: &DecodeConfig) -> anyhow::Result<DecodedWithdrawal> {
    Ok(decode_withdrawal_data(&config.data)?)
}

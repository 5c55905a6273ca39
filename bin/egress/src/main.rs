use std::{process, sync::Arc};

use clap::Parser;
use egress::cli::{
    Cli, Commands,
    decode::{DecodeConfig, run_decode},
    encode::{EncodeConfig, run_encode},
    server::ServerConfig,
    validate::{ValidateConfig, run_validate},
    validators::{ValidatorsConfig, run_validators},
    verbosity::Verbosity,
};
use egress_rpc::{config::RpcServerConfig, start_server};
use egress_staking::client::StakingClients;
use egress_transactions::log::TransactionLog;
use egress_withdrawal::policy::WithdrawalVerdict;
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let result = match cli.command {
        Commands::Server(config) => run_server(config),
        Commands::Encode(config) => encode(&config),
        Commands::Decode(config) => decode(&config),
        Commands::Validate(config) => validate(&config),
        Commands::Validators(config) => list_validators(&config),
    };

    if let Err(err) = result {
        error!("{err}");
        process::exit(1);
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    info!("Starting egress withdrawal API");

    let staking_clients = StakingClients::new(
        config.kiln_api_keys.kiln_api_key,
        config.kiln_api_keys.kiln_testnet_api_key,
        config.request_timeout,
    )?;
    let transaction_log = Arc::new(TransactionLog::default());
    let server_config = RpcServerConfig::new(
        config.http_address,
        config.http_port,
        config.http_allow_origin,
    );

    runtime()?.block_on(async {
        tokio::select! {
            result = start_server(server_config, staking_clients, transaction_log) => {
                result.map_err(anyhow::Error::from)
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, shutting down");
                Ok(())
            }
        }
    })
}

fn encode(config: &EncodeConfig) -> anyhow::Result<()> {
    let output: Value = run_encode(config)?;
    print_json(&output)
}

fn decode(config: &DecodeConfig) -> anyhow::Result<()> {
    print_json(&run_decode(config)?)
}

fn validate(config: &ValidateConfig) -> anyhow::Result<()> {
    match run_validate(config)? {
        WithdrawalVerdict::Valid => {
            println!("Withdrawal of {} ETH is valid", config.amount);
            Ok(())
        }
        WithdrawalVerdict::Invalid(rejection) => Err(rejection.into()),
    }
}

fn list_validators(config: &ValidatorsConfig) -> anyhow::Result<()> {
    let validators = runtime()?.block_on(run_validators(config))?;
    info!(
        "Found {} validators for {} on {}",
        validators.len(),
        config.address,
        config.network.name
    );
    print_json(&validators)
}

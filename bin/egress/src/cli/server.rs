use std::{net::IpAddr, time::Duration};

use clap::{Args, Parser};
use egress_network_spec::networks::Network;

use crate::cli::constants::{
    DEFAULT_HTTP_ADDRESS, DEFAULT_HTTP_ALLOW_ORIGIN, DEFAULT_HTTP_PORT, DEFAULT_REQUEST_TIMEOUT,
};

/// Kiln API keys, one per network. Kept out of the command line history by reading them from
/// the environment.
#[derive(Debug, Clone, Default, Args)]
pub struct KilnApiKeys {
    #[arg(long, env = "KILN_API_KEY", hide_env_values = true, help = "Kiln API key for mainnet")]
    pub kiln_api_key: Option<String>,

    #[arg(
        long,
        env = "KILN_TESTNET_API_KEY",
        hide_env_values = true,
        help = "Kiln API key for the Hoodi testnet"
    )]
    pub kiln_testnet_api_key: Option<String>,
}

impl KilnApiKeys {
    pub fn for_network(&self, network: Network) -> Option<String> {
        match network {
            Network::Mainnet => self.kiln_api_key.clone(),
            Network::Hoodi => self.kiln_testnet_api_key.clone(),
        }
    }
}

#[derive(Debug, Parser)]
pub struct ServerConfig {
    #[arg(long, help = "Set HTTP address", default_value_t = DEFAULT_HTTP_ADDRESS)]
    pub http_address: IpAddr,

    #[arg(long, help = "Set HTTP Port", default_value_t = DEFAULT_HTTP_PORT)]
    pub http_port: u16,

    #[arg(long, help = "Allow cross-origin requests from any origin", default_value_t = DEFAULT_HTTP_ALLOW_ORIGIN)]
    pub http_allow_origin: bool,

    #[arg(long, help = "Set HTTP request timeout for Kiln API calls, in seconds", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[command(flatten)]
    pub kiln_api_keys: KilnApiKeys,
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the request timeout: {err:?}"),
    )?))
}

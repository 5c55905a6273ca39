use std::sync::Arc;

use crate::networks::{HOODI, MAINNET, Network, NetworkSpec};

/// Accepts a network name or its chain id.
pub fn network_parser(network_string: &str) -> Result<Arc<NetworkSpec>, String> {
    match network_string.to_lowercase().as_str() {
        "mainnet" => Ok(MAINNET.clone()),
        "hoodi" => Ok(HOODI.clone()),
        other => {
            let chain_id = other
                .parse::<u64>()
                .map_err(|_| format!("Unknown network: {network_string}"))?;
            Network::from_chain_id(chain_id)
                .map(|network| network.spec())
                .ok_or_else(|| format!("Unsupported chain ID: {chain_id}"))
        }
    }
}

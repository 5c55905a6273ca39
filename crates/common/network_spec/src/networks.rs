use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use alloy_primitives::{Address, address};
use serde::{Deserialize, Serialize};

/// The EIP-7002 withdrawal request predeploy. Same address on every network.
pub const WITHDRAWAL_REQUEST_PREDEPLOY_ADDRESS: Address =
    address!("0x00000961Ef480Eb55e80D19ad83579A64c007002");

/// Minimum balance a validator must keep after a partial withdrawal.
pub const MIN_VALIDATOR_BALANCE_ETH: f64 = 32.0;

pub const MAINNET_CHAIN_ID: u64 = 1;
pub const HOODI_CHAIN_ID: u64 = 560048;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Hoodi,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => MAINNET_CHAIN_ID,
            Network::Hoodi => HOODI_CHAIN_ID,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            MAINNET_CHAIN_ID => Some(Network::Mainnet),
            HOODI_CHAIN_ID => Some(Network::Hoodi),
            _ => None,
        }
    }

    pub fn spec(&self) -> Arc<NetworkSpec> {
        match self {
            Network::Mainnet => MAINNET.clone(),
            Network::Hoodi => HOODI.clone(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Hoodi => write!(f, "hoodi"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkSpec {
    pub network: Network,
    pub name: &'static str,
    pub withdrawal_contract_address: Address,
    pub min_validator_balance_eth: f64,
    pub staking_api_base_url: &'static str,
    /// Name of the environment variable holding the staking API key for this network.
    pub staking_api_key_env: &'static str,
    pub block_explorer_url: &'static str,
    pub block_explorer_name: &'static str,
}

impl NetworkSpec {
    pub fn chain_id(&self) -> u64 {
        self.network.chain_id()
    }

    pub fn block_explorer_tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{hash}", self.block_explorer_url)
    }

    pub fn withdrawal_contract_explorer_url(&self) -> String {
        format!(
            "{}/address/{}",
            self.block_explorer_url,
            self.withdrawal_contract_address.to_checksum(None)
        )
    }
}

pub static MAINNET: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Mainnet,
        name: "Ethereum Mainnet",
        withdrawal_contract_address: WITHDRAWAL_REQUEST_PREDEPLOY_ADDRESS,
        min_validator_balance_eth: MIN_VALIDATOR_BALANCE_ETH,
        staking_api_base_url: "https://api.kiln.fi/v1",
        staking_api_key_env: "KILN_API_KEY",
        block_explorer_url: "https://etherscan.io",
        block_explorer_name: "Etherscan",
    }
    .into()
});

pub static HOODI: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Hoodi,
        name: "Hoodi",
        withdrawal_contract_address: WITHDRAWAL_REQUEST_PREDEPLOY_ADDRESS,
        min_validator_balance_eth: MIN_VALIDATOR_BALANCE_ETH,
        staking_api_base_url: "https://api.testnet.kiln.fi/v1",
        staking_api_key_env: "KILN_TESTNET_API_KEY",
        block_explorer_url: "https://hoodi.etherscan.io",
        block_explorer_name: "Hoodi Scan",
    }
    .into()
});

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Network::Mainnet, 1)]
    #[case(Network::Hoodi, 560048)]
    fn test_chain_id_round_trip(#[case] network: Network, #[case] chain_id: u64) {
        assert_eq!(network.chain_id(), chain_id);
        assert_eq!(Network::from_chain_id(chain_id), Some(network));
        assert_eq!(network.spec().network, network);
    }

    #[test]
    fn test_unknown_chain_id() {
        assert_eq!(Network::from_chain_id(17000), None);
    }

    #[test]
    fn test_block_explorer_tx_url() {
        let hash = "0xabc123";
        assert_eq!(
            MAINNET.block_explorer_tx_url(hash),
            "https://etherscan.io/tx/0xabc123"
        );
        assert_eq!(
            HOODI.block_explorer_tx_url(hash),
            "https://hoodi.etherscan.io/tx/0xabc123"
        );
        assert_eq!(HOODI.block_explorer_name, "Hoodi Scan");
    }

    #[test]
    fn test_withdrawal_contract_explorer_url() {
        assert_eq!(
            MAINNET.withdrawal_contract_explorer_url(),
            "https://etherscan.io/address/0x00000961Ef480Eb55e80D19ad83579A64c007002"
        );
    }

    #[test]
    fn test_minimum_balance_is_shared() {
        assert_eq!(
            MAINNET.min_validator_balance_eth,
            HOODI.min_validator_balance_eth
        );
        assert_eq!(MAINNET.min_validator_balance_eth, 32.0);
    }

    #[test]
    fn test_network_serde() {
        assert_eq!(
            serde_json::to_string(&Network::Hoodi).expect("serialize"),
            "\"hoodi\""
        );
        let network: Network = serde_json::from_str("\"mainnet\"").expect("deserialize");
        assert_eq!(network, Network::Mainnet);
    }
}

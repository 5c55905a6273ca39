use std::{sync::Arc, time::Duration};

use alloy_primitives::Address;
use egress_network_spec::networks::{HOODI, MAINNET, Network, NetworkSpec};
use egress_withdrawal::validator::Validator;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{error::StakingError, http_client::ClientWithBaseUrl, normalize::normalize_stakes};

const STAKES_PATH: &str = "eth/stakes";

/// Looks up the validators owned by a wallet through Kiln's stakes API.
#[derive(Debug, Clone)]
pub struct KilnApiClient {
    network_spec: Arc<NetworkSpec>,
    http_client: ClientWithBaseUrl,
}

impl KilnApiClient {
    pub fn new(
        network_spec: Arc<NetworkSpec>,
        api_key: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, StakingError> {
        let base_url = Url::parse(network_spec.staking_api_base_url)?;
        Self::with_base_url(network_spec, api_key, base_url, request_timeout)
    }

    pub fn with_base_url(
        network_spec: Arc<NetworkSpec>,
        api_key: Option<String>,
        base_url: Url,
        request_timeout: Duration,
    ) -> Result<Self, StakingError> {
        let Some(api_key) = api_key.filter(|api_key| !api_key.is_empty()) else {
            return Err(StakingError::MissingApiKey {
                env_var: network_spec.staking_api_key_env,
            });
        };

        Ok(Self {
            http_client: ClientWithBaseUrl::new(base_url, request_timeout, &api_key)?,
            network_spec,
        })
    }

    pub fn stakes_url(&self, wallet: &Address) -> Result<Url, StakingError> {
        let mut url = self.http_client.endpoint(STAKES_PATH)?;
        url.query_pairs_mut()
            .append_pair("wallets", &wallet.to_checksum(None));
        Ok(url)
    }

    pub async fn get_validators(&self, wallet: &Address) -> Result<Vec<Validator>, StakingError> {
        let url = self.stakes_url(wallet)?;
        info!(
            "Fetching validators for {wallet} on chain {} from {url}",
            self.network_spec.chain_id()
        );

        let response = self
            .http_client
            .execute(self.http_client.get(url).build()?)
            .await?;
        let status_code = response.status();
        debug!("Kiln response status: {status_code}");

        if status_code == StatusCode::NOT_FOUND {
            info!("Kiln knows no validators for {wallet}");
            return Ok(vec![]);
        }
        if !status_code.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Kiln API error response ({status_code}): {message}");
            if status_code == StatusCode::UNAUTHORIZED {
                return Err(StakingError::InvalidApiKey);
            }
            return Err(StakingError::RequestFailedWithMessage {
                status_code,
                message,
            });
        }

        let body = response.text().await?;
        let body = serde_json::from_str::<Value>(&body).unwrap_or_else(|err| {
            warn!("Kiln returned a body that is not JSON: {err}");
            Value::Null
        });

        let validators = normalize_stakes(&body);
        info!("Returning {} validators for {wallet}", validators.len());
        Ok(validators)
    }
}

/// One Kiln client per supported network. A network without an API key has no client, and
/// lookups on it fail with [StakingError::MissingApiKey].
#[derive(Debug, Clone, Default)]
pub struct StakingClients {
    mainnet: Option<KilnApiClient>,
    hoodi: Option<KilnApiClient>,
}

impl StakingClients {
    pub fn new(
        mainnet_api_key: Option<String>,
        hoodi_api_key: Option<String>,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            mainnet: build_client(MAINNET.clone(), mainnet_api_key, request_timeout)?,
            hoodi: build_client(HOODI.clone(), hoodi_api_key, request_timeout)?,
        })
    }

    pub fn from_clients(mainnet: Option<KilnApiClient>, hoodi: Option<KilnApiClient>) -> Self {
        Self { mainnet, hoodi }
    }

    pub fn for_network(&self, network: Network) -> Result<&KilnApiClient, StakingError> {
        let client = match network {
            Network::Mainnet => self.mainnet.as_ref(),
            Network::Hoodi => self.hoodi.as_ref(),
        };
        client.ok_or(StakingError::MissingApiKey {
            env_var: network.spec().staking_api_key_env,
        })
    }
}

fn build_client(
    network_spec: Arc<NetworkSpec>,
    api_key: Option<String>,
    request_timeout: Duration,
) -> anyhow::Result<Option<KilnApiClient>> {
    match KilnApiClient::new(network_spec.clone(), api_key, request_timeout) {
        Ok(client) => Ok(Some(client)),
        Err(StakingError::MissingApiKey { env_var }) => {
            warn!(
                "{env_var} not set, validator lookups on {} are disabled",
                network_spec.name
            );
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub mod config;
pub mod handlers;
pub mod routes;
pub mod server;

use std::{io::Result, sync::Arc};

use config::RpcServerConfig;
use egress_staking::client::StakingClients;
use egress_transactions::log::TransactionLog;
use server::RpcServerBuilder;

use crate::routes::register_routers;

/// Start the withdrawal API server.
pub async fn start_server(
    server_config: RpcServerConfig,
    staking_clients: StakingClients,
    transaction_log: Arc<TransactionLog>,
) -> Result<()> {
    RpcServerBuilder::new(server_config.http_socket_address)
        .allow_origin(server_config.http_allow_origin)
        .with_data(staking_clients)
        .with_data(transaction_log)
        .configure(register_routers)
        .start()
        .await
}

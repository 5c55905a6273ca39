use std::{io::Result, net::SocketAddr, sync::Arc};

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Condition, Logger},
    web::{Data, ServiceConfig},
};
use tracing::info;

/// A type alias for a function that configures the actix-web ServiceConfig.
type Configurator = dyn Fn(&mut ServiceConfig) + Send + Sync;

/// A builder for configuring and starting an RPC server.
pub struct RpcServerBuilder {
    http_socket_address: SocketAddr,
    http_allow_origin: bool,
    configurators: Vec<Arc<Configurator>>,
}

impl RpcServerBuilder {
    /// A builder bound to `http_socket_address`, serving same-origin requests only.
    pub fn new(http_socket_address: SocketAddr) -> Self {
        Self {
            http_socket_address,
            http_allow_origin: false,
            configurators: Vec::new(),
        }
    }

    /// Answer cross-origin requests from any origin.
    pub fn allow_origin(mut self, allow: bool) -> Self {
        self.http_allow_origin = allow;
        self
    }

    /// Registers routes or services on every worker's App.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.configurators.push(Arc::new(f));
        self
    }

    /// Shares `value` with the handlers as [Data].
    pub fn with_data<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.configurators
            .push(Arc::new(move |config: &mut ServiceConfig| {
                config.app_data(Data::new(value.clone()));
            }));
        self
    }

    /// Binds the socket and serves until the server stops.
    pub async fn start(self) -> Result<()> {
        let configurators = self.configurators;
        let configure_all = move |config: &mut ServiceConfig| {
            for configurator in &configurators {
                configurator(config);
            }
        };
        let allow_origin = self.http_allow_origin;

        info!(
            "starting HTTP server on {:?} (allow any origin: {allow_origin})",
            self.http_socket_address
        );

        let server = HttpServer::new(move || {
            App::new()
                .wrap(cors(allow_origin))
                .wrap(Logger::default())
                .configure(configure_all.clone())
        })
        .bind(self.http_socket_address)?
        .run();

        server.await
    }
}

fn cors(allow_origin: bool) -> Condition<Cors> {
    Condition::new(allow_origin, Cors::permissive())
}

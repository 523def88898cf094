//! gRPC server setup.

use crate::proto::{health, product, user};
use crate::services::{HealthServiceImpl, ProductGrpcService, UserGrpcService};
use emporia_config::ServerConfig;
use emporia_core::EmporiaResult;
use emporia_service::{ProductService, UserService};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;

/// gRPC server exposing the user and product services.
pub struct GrpcServer {
    addr: SocketAddr,
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
}

impl GrpcServer {
    /// Creates a new gRPC server.
    pub fn new(
        config: &ServerConfig,
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
    ) -> EmporiaResult<Self> {
        let addr = config.grpc_addr().parse().map_err(|e| {
            emporia_core::EmporiaError::Configuration(format!("Invalid gRPC address: {}", e))
        })?;

        Ok(Self {
            addr,
            user_service,
            product_service,
        })
    }

    /// Starts the gRPC server and drains in-flight calls when the shutdown
    /// signal resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> EmporiaResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        info!("Starting gRPC server on {}", self.addr);

        let health_service = HealthServiceImpl::new();
        let user_grpc_service = UserGrpcService::new(self.user_service);
        let product_grpc_service = ProductGrpcService::new(self.product_service);

        Server::builder()
            .add_service(health::health_server::HealthServer::new(health_service))
            .add_service(user::user_service_server::UserServiceServer::new(
                user_grpc_service,
            ))
            .add_service(product::product_service_server::ProductServiceServer::new(
                product_grpc_service,
            ))
            .serve_with_shutdown(self.addr, signal)
            .await
            .map_err(|e| emporia_core::EmporiaError::Internal(format!("gRPC server error: {}", e)))?;

        Ok(())
    }
}

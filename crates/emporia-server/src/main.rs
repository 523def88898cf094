//! # Emporia Server
//!
//! Main entry point: loads configuration, wires the store, cache, and entity
//! services, then serves the REST and gRPC APIs concurrently until a shutdown
//! signal arrives.

use emporia_config::{AppConfig, CacheBackend, ConfigLoader};
use emporia_core::{EmporiaError, EmporiaResult};
use emporia_grpc::GrpcServer;
use emporia_repository::{DatabasePool, PgProductRepository, PgUserRepository};
use emporia_rest::{create_router, AppState};
use emporia_service::{
    Cache, MemoryCache, ProductService, ProductServiceImpl, RedisCache, UserService,
    UserServiceImpl,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Emporia Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> EmporiaResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);
    info!("Cache backend: {}", config.cache.backend);

    // Create database pool and run migrations
    let db_pool = DatabasePool::connect(&config.database).await?;
    db_pool.run_migrations().await?;

    // One cache instance, shared by both entity services
    let cache = build_cache(&config)?;

    // Repositories
    let user_repository = Arc::new(PgUserRepository::new(db_pool.inner().clone()));
    let product_repository = Arc::new(PgProductRepository::new(db_pool.inner().clone()));

    // Entity services
    let user_service: Arc<dyn UserService> =
        Arc::new(UserServiceImpl::new(user_repository, cache.clone()));
    let product_service: Arc<dyn ProductService> =
        Arc::new(ProductServiceImpl::new(product_repository, cache));

    // REST router
    let app_state = AppState::new(user_service.clone(), product_service.clone());
    let router = create_router(app_state, &config.server);

    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| EmporiaError::Internal(format!("Failed to bind REST: {}", e)))?;

    // gRPC server
    let grpc_server = GrpcServer::new(&config.server, user_service, product_service)?;

    let grace = config.server.shutdown_grace();

    // Run both servers until the shutdown signal fires; each drains its
    // in-flight requests within the grace period.
    let rest = async {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal(grace))
            .await
            .map_err(|e| EmporiaError::Internal(format!("REST server error: {}", e)))
    };
    let grpc = grpc_server.serve_with_shutdown(shutdown_signal(grace));

    tokio::try_join!(rest, grpc)?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the configured cache backend.
fn build_cache(config: &AppConfig) -> EmporiaResult<Arc<dyn Cache>> {
    match config.cache.backend {
        CacheBackend::Memory => Ok(Arc::new(MemoryCache::new())),
        CacheBackend::Redis => {
            let mut redis_config = deadpool_redis::Config::from_url(&config.cache.redis_url);
            redis_config.pool = Some(deadpool_redis::PoolConfig::new(
                config.cache.pool_size as usize,
            ));
            let pool = redis_config
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .map_err(|e| {
                    EmporiaError::Cache(format!("Failed to create Redis pool: {}", e))
                })?;
            Ok(Arc::new(RedisCache::new(pool)))
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,emporia=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Resolves when a shutdown signal arrives, then arms a hard-exit timer so
/// draining in-flight requests cannot exceed the grace period.
async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        warn!("Shutdown grace period of {:?} exceeded, terminating", grace);
        std::process::exit(1);
    });
}

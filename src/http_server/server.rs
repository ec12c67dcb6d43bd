//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::rest_api::{RecordsHandler, RestServer};
use crate::storage::{SqlStore, StoreError};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// Server startup failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid CORS origin: '{0}'")]
    InvalidOrigin(String),

    #[error("Invalid socket address: '{0}'")]
    InvalidAddress(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP Server for client and asset records
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Open the store named by the config and build the server
    pub async fn connect(config: HttpServerConfig) -> Result<Self, ServerError> {
        let store = SqlStore::connect(&config.store).await?;
        Self::with_store(config, store)
    }

    /// Build the server around an already opened store
    pub fn with_store(config: HttpServerConfig, store: SqlStore) -> Result<Self, ServerError> {
        let handler = RecordsHandler::new(store, config.client_rules());
        let router = Self::build_router(&config, handler)?;
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        handler: RecordsHandler,
    ) -> Result<Router, ServerError> {
        let origin: HeaderValue = config
            .cors_origin
            .parse()
            .map_err(|_| ServerError::InvalidOrigin(config.cors_origin.clone()))?;

        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        Ok(Router::new()
            .merge(health_routes())
            .merge(RestServer::new(handler).router())
            .layer(cors)
            .layer(TraceLayer::new_for_http()))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), ServerError> {
        let raw = self.config.socket_addr();
        let addr: SocketAddr = raw.parse().map_err(|_| ServerError::InvalidAddress(raw.clone()))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, origin = %self.config.cors_origin, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

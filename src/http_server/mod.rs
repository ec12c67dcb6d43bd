//! # Clientfolio HTTP Server Module
//!
//! Combines the health check and the REST routes into one Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/clients`, `/clients/:id`, `/clients/:id/assets` - Client records
//! - `/assets`, `/assets-static` - Asset records and the reference catalog

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use server::{HttpServer, ServerError};

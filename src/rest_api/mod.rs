//! # Clientfolio REST API Module
//!
//! Provides HTTP endpoints for client and asset records. Every request is
//! validated before the store is touched, and store failures are mapped to
//! HTTP errors in one place.

pub mod errors;
pub mod handler;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::RecordsHandler;
pub use server::RestServer;

//! Observability subsystem for clientfolio
//!
//! Structured logging through `tracing`. Handlers and the store emit
//! events; `logger::init` decides where and how they are written.

pub mod logger;

pub use logger::{init, LogFormat, LoggingError};

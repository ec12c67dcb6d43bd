//! Persistence subsystem for clientfolio
//!
//! Relational storage for clients and their assets on SQLite via `sqlx`.
//!
//! # Design Principles
//!
//! - One long-lived connection handle shared by all requests
//! - No explicit transactions or locking; the store isolates statements
//! - Missing rows detected from the mutation itself, not a pre-check
//! - Referential integrity enforced by foreign keys

mod errors;
mod store;
mod tables;

pub use errors::{StoreError, StoreResult};
pub use store::{SqlStore, StoreConfig};

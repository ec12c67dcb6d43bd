//! clientfolio - client and asset records behind a validated REST API

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod storage;

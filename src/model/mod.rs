//! Domain records: clients, their assets, and the reference catalog.

mod asset;
mod catalog;
mod client;

pub use asset::{asset_schema, Asset, AssetWithClient, NewAsset};
pub use catalog::{reference_assets, ReferenceAsset};
pub use client::{Client, ClientRules, ClientWithAssets, NewClient, DEFAULT_NAME_MIN_LENGTH};

/// Parses a record identifier taken from a URL path segment.
///
/// Only base-10 integers are identifiers; surrounding whitespace is ignored.
pub fn parse_record_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

//! Fixed reference asset catalog, independent of the store.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceAsset {
    pub name: &'static str,
    pub value: f64,
}

const REFERENCE_ASSETS: [ReferenceAsset; 4] = [
    ReferenceAsset { name: "Ação XYZ", value: 150.75 },
    ReferenceAsset { name: "Fundo ABC", value: 85.20 },
    ReferenceAsset { name: "ETF DEF", value: 120.50 },
    ReferenceAsset { name: "Bond GHI", value: 95.30 },
];

pub fn reference_assets() -> &'static [ReferenceAsset] {
    &REFERENCE_ASSETS
}

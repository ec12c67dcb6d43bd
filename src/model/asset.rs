//! Asset records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{FieldDef, Schema, SchemaResult, SchemaValidator};

use super::client::Client;

/// Persisted asset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub client_id: i64,
}

/// Asset together with its owning client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetWithClient {
    #[serde(flatten)]
    pub asset: Asset,
    pub client: Client,
}

/// Schema for asset payloads
pub fn asset_schema() -> Schema {
    Schema::new("asset")
        .field("name", FieldDef::required_string())
        .field("value", FieldDef::required_float())
        .field("clientId", FieldDef::required_int())
}

/// Validated asset payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub value: f64,
    pub client_id: i64,
}

impl NewAsset {
    /// Validates a raw payload. The referenced client is not looked up here.
    pub fn from_document(document: &Value) -> SchemaResult<Self> {
        let schema = asset_schema();
        SchemaValidator::new(&schema).validate_document(document)?;

        Ok(Self {
            name: document
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            value: document
                .get("value")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
            client_id: document
                .get("clientId")
                .and_then(Value::as_i64)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_valid_asset() {
        let doc = json!({ "name": "Tesouro Selic", "value": 1000, "clientId": 7 });
        let asset = NewAsset::from_document(&doc).unwrap();
        assert_eq!(asset.name, "Tesouro Selic");
        assert_eq!(asset.value, 1000.0);
        assert_eq!(asset.client_id, 7);
    }

    #[test]
    fn test_all_fields_required() {
        let err = NewAsset::from_document(&json!({})).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "value", "clientId"]);
    }

    #[test]
    fn test_negative_value_allowed() {
        let doc = json!({ "name": "Margin", "value": -12.5, "clientId": 1 });
        assert_eq!(NewAsset::from_document(&doc).unwrap().value, -12.5);
    }

    #[test]
    fn test_serializes_client_id_camel_case() {
        let asset = Asset {
            id: 3,
            name: "CDB".into(),
            value: 10.5,
            client_id: 2,
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["clientId"], 2);
        assert!(json.get("client_id").is_none());
    }
}

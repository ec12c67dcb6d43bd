//! Client records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{Constraint, FieldDef, Schema, SchemaResult, SchemaValidator};

use super::asset::Asset;

/// Minimum client name length when nothing else is configured
pub const DEFAULT_NAME_MIN_LENGTH: usize = 2;

/// Persisted client row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: bool,
}

/// Client with its owned assets, ordered by insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientWithAssets {
    #[serde(flatten)]
    pub client: Client,
    pub assets: Vec<Asset>,
}

/// Validation rules for client payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRules {
    pub name_min_length: usize,
}

impl Default for ClientRules {
    fn default() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
        }
    }
}

impl ClientRules {
    /// Schema shared by create and update
    pub fn schema(&self) -> Schema {
        Schema::new("client")
            .field(
                "name",
                FieldDef::required_string().with_constraint(Constraint::MinLength {
                    min: self.name_min_length,
                }),
            )
            .field(
                "email",
                FieldDef::required_string().with_constraint(Constraint::Email),
            )
            .field("status", FieldDef::optional_bool())
    }
}

/// Validated client payload with `status` already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub status: bool,
}

impl NewClient {
    /// Validates a raw payload and resolves defaults.
    ///
    /// `status` defaults to `true` when absent.
    pub fn from_document(document: &Value, rules: &ClientRules) -> SchemaResult<Self> {
        let schema = rules.schema();
        SchemaValidator::new(&schema).validate_document(document)?;

        Ok(Self {
            name: string_field(document, "name"),
            email: string_field(document, "email"),
            status: document
                .get("status")
                .and_then(Value::as_bool)
                .unwrap_or(true),
        })
    }
}

fn string_field(document: &Value, field: &str) -> String {
    document
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

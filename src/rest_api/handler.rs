//! # REST API Handler
//!
//! Validates raw request input, then delegates to the store. Store failures
//! pass through one mapping boundary: `NotFound` becomes 404, a dangling
//! `clientId` becomes a validation error, anything else becomes 500.

use serde_json::Value;

use crate::model::{
    parse_record_id, reference_assets, Asset, AssetWithClient, Client, ClientRules,
    ClientWithAssets, NewAsset, NewClient, ReferenceAsset,
};
use crate::schema::{FieldViolation, ValidationErrors};
use crate::storage::{SqlStore, StoreError};

use super::errors::{RestError, RestResult};

pub const CLIENT_NOT_FOUND: &str = "Client not found";
pub const INVALID_CLIENT_ID: &str = "Invalid client id";
/// Separate wording for the asset listing route, kept for the localized UI
pub const INVALID_ASSET_OWNER_ID: &str = "ID do cliente inválido.";

/// Request handler for client and asset operations
#[derive(Debug, Clone)]
pub struct RecordsHandler {
    store: SqlStore,
    rules: ClientRules,
}

impl RecordsHandler {
    pub fn new(store: SqlStore, rules: ClientRules) -> Self {
        Self { store, rules }
    }

    pub fn store(&self) -> &SqlStore {
        &self.store
    }

    // ==================
    // Clients
    // ==================

    pub async fn create_client(&self, body: &Value) -> RestResult<Client> {
        let new = NewClient::from_document(body, &self.rules)?;
        self.store
            .create_client(&new)
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    pub async fn list_clients(&self) -> RestResult<Vec<ClientWithAssets>> {
        self.store
            .list_clients()
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    /// A malformed id cannot name any client, so it reads as not found.
    pub async fn get_client(&self, raw_id: &str) -> RestResult<ClientWithAssets> {
        let id = parse_record_id(raw_id)
            .ok_or_else(|| RestError::NotFound(CLIENT_NOT_FOUND.to_string()))?;
        self.store
            .get_client(id)
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    pub async fn update_client(&self, raw_id: &str, body: &Value) -> RestResult<Client> {
        let id = parse_id(raw_id, INVALID_CLIENT_ID)?;
        let new = NewClient::from_document(body, &self.rules)?;
        self.store
            .update_client(id, &new)
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    pub async fn delete_client(&self, raw_id: &str) -> RestResult<()> {
        let id = parse_id(raw_id, INVALID_CLIENT_ID)?;
        self.store
            .delete_client(id)
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    // ==================
    // Assets
    // ==================

    /// The owning client is not looked up first; the store's foreign key
    /// decides.
    pub async fn create_asset(&self, body: &Value) -> RestResult<Asset> {
        let new = NewAsset::from_document(body)?;
        self.store
            .create_asset(&new)
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    pub async fn list_assets(&self) -> RestResult<Vec<AssetWithClient>> {
        self.store
            .list_assets()
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    pub async fn list_client_assets(&self, raw_id: &str) -> RestResult<Vec<Asset>> {
        let id = parse_id(raw_id, INVALID_ASSET_OWNER_ID)?;
        self.store
            .list_client_assets(id)
            .await
            .map_err(|e| map_store_error(e, CLIENT_NOT_FOUND))
    }

    pub fn list_reference_assets(&self) -> &'static [ReferenceAsset] {
        reference_assets()
    }
}

fn parse_id(raw: &str, message: &str) -> RestResult<i64> {
    parse_record_id(raw).ok_or_else(|| RestError::InvalidId(message.to_string()))
}

/// Single boundary between store outcomes and HTTP errors.
fn map_store_error(err: StoreError, not_found: &str) -> RestError {
    match err {
        StoreError::NotFound => {
            tracing::debug!(message = not_found, "store reported no matching row");
            RestError::NotFound(not_found.to_string())
        }
        StoreError::ForeignKeyViolation(detail) => {
            tracing::debug!(%detail, "referenced client missing");
            RestError::Validation(ValidationErrors::single(FieldViolation::new(
                "clientId",
                "Client does not exist",
            )))
        }
        other => RestError::Internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreConfig;
    use serde_json::json;

    async fn handler() -> RecordsHandler {
        let store = SqlStore::connect(&StoreConfig::in_memory()).await.unwrap();
        RecordsHandler::new(store, ClientRules::default())
    }

    #[tokio::test]
    async fn test_invalid_email_writes_nothing() {
        let handler = handler().await;
        let err = handler
            .create_client(&json!({ "name": "Maria", "email": "not-an-email" }))
            .await
            .unwrap_err();

        match err {
            RestError::Validation(errors) => assert!(errors.has_field("email")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(handler.list_clients().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_id_on_get_is_not_found() {
        let handler = handler().await;
        let err = handler.get_client("abc").await.unwrap_err();
        assert!(matches!(err, RestError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_id_on_update_checked_before_body() {
        let handler = handler().await;
        let err = handler.update_client("x1", &json!({})).await.unwrap_err();
        assert!(matches!(err, RestError::InvalidId(ref m) if m == INVALID_CLIENT_ID));
    }

    #[tokio::test]
    async fn test_asset_listing_uses_own_id_message() {
        let handler = handler().await;
        let err = handler.list_client_assets("nope").await.unwrap_err();
        assert!(matches!(err, RestError::InvalidId(ref m) if m == INVALID_ASSET_OWNER_ID));
    }

    #[tokio::test]
    async fn test_dangling_client_id_is_validation_error() {
        let handler = handler().await;
        let err = handler
            .create_asset(&json!({ "name": "CDB", "value": 10.0, "clientId": 404 }))
            .await
            .unwrap_err();

        match err {
            RestError::Validation(errors) => assert!(errors.has_field("clientId")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_database_errors_map_to_internal() {
        let err = map_store_error(StoreError::Database(sqlx::Error::PoolClosed), CLIENT_NOT_FOUND);
        assert!(matches!(err, RestError::Internal(_)));
    }

    #[tokio::test]
    async fn test_closed_store_is_internal_error() {
        let handler = handler().await;
        handler.store().close().await;
        let err = handler.list_clients().await.unwrap_err();
        assert!(matches!(err, RestError::Internal(_)));
    }
}

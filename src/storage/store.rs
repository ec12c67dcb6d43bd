//! SQLite-backed persistence accessor
//!
//! Mutations on a missing row are detected from the statement outcome
//! (`RETURNING` yields nothing, or zero rows affected) rather than by a
//! separate existence query.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::model::{Asset, AssetWithClient, Client, ClientWithAssets, NewAsset, NewClient};

use super::errors::{StoreError, StoreResult};
use super::tables::CREATE_STATEMENTS;

const CLIENT_COLUMNS: &str = "id, name, email, status";
const ASSET_COLUMNS: &str = "id, name, value, client_id";

/// Store connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// sqlx SQLite URL, e.g. `sqlite://clientfolio.db?mode=rwc` or `sqlite::memory:`
    #[serde(default = "default_url")]
    pub url: String,

    /// Connections held open. One keeps a single long-lived handle.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_url() -> String {
    "sqlite://clientfolio.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    1
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl StoreConfig {
    /// Private in-memory database, mostly for tests
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// Joined asset/client row
#[derive(sqlx::FromRow)]
struct AssetClientRow {
    id: i64,
    name: String,
    value: f64,
    client_id: i64,
    client_name: String,
    client_email: String,
    client_status: bool,
}

impl From<AssetClientRow> for AssetWithClient {
    fn from(row: AssetClientRow) -> Self {
        Self {
            asset: Asset {
                id: row.id,
                name: row.name,
                value: row.value,
                client_id: row.client_id,
            },
            client: Client {
                id: row.client_id,
                name: row.client_name,
                email: row.client_email,
                status: row.client_status,
            },
        }
    }
}

/// Persistence accessor for clients and assets.
///
/// Cloning is cheap and shares the underlying connection handle.
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    /// Opens the store and makes sure both tables exist.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| StoreError::Config(format!("{}: {}", config.url, e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_tables().await?;

        tracing::info!(url = %config.url, "store opened");
        Ok(store)
    }

    async fn ensure_tables(&self) -> StoreResult<()> {
        for statement in CREATE_STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    // ==================
    // Clients
    // ==================

    pub async fn create_client(&self, new: &NewClient) -> StoreResult<Client> {
        let sql = format!(
            "INSERT INTO clients (name, email, status) VALUES (?, ?, ?) RETURNING {}",
            CLIENT_COLUMNS
        );
        let client = sqlx::query_as::<_, Client>(&sql)
            .bind(&new.name)
            .bind(&new.email)
            .bind(new.status)
            .fetch_one(&self.pool)
            .await?;
        Ok(client)
    }

    /// All clients in id order, each with its assets.
    pub async fn list_clients(&self) -> StoreResult<Vec<ClientWithAssets>> {
        let clients = sqlx::query_as::<_, Client>(&format!(
            "SELECT {} FROM clients ORDER BY id",
            CLIENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let assets = sqlx::query_as::<_, Asset>(&format!(
            "SELECT {} FROM assets ORDER BY id",
            ASSET_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut by_client: HashMap<i64, Vec<Asset>> = HashMap::new();
        for asset in assets {
            by_client.entry(asset.client_id).or_default().push(asset);
        }

        Ok(clients
            .into_iter()
            .map(|client| {
                let assets = by_client.remove(&client.id).unwrap_or_default();
                ClientWithAssets { client, assets }
            })
            .collect())
    }

    pub async fn get_client(&self, id: i64) -> StoreResult<ClientWithAssets> {
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {} FROM clients WHERE id = ?",
            CLIENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        let assets = self.list_client_assets(id).await?;
        Ok(ClientWithAssets { client, assets })
    }

    /// Replaces name, email and status. `NotFound` when no row matched.
    pub async fn update_client(&self, id: i64, new: &NewClient) -> StoreResult<Client> {
        let sql = format!(
            "UPDATE clients SET name = ?, email = ?, status = ? WHERE id = ? RETURNING {}",
            CLIENT_COLUMNS
        );
        sqlx::query_as::<_, Client>(&sql)
            .bind(&new.name)
            .bind(&new.email)
            .bind(new.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Deletes a client and, through the foreign key, its assets.
    pub async fn delete_client(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    // ==================
    // Assets
    // ==================

    /// Inserts an asset. A missing client surfaces as `ForeignKeyViolation`.
    pub async fn create_asset(&self, new: &NewAsset) -> StoreResult<Asset> {
        let sql = format!(
            "INSERT INTO assets (name, value, client_id) VALUES (?, ?, ?) RETURNING {}",
            ASSET_COLUMNS
        );
        let asset = sqlx::query_as::<_, Asset>(&sql)
            .bind(&new.name)
            .bind(new.value)
            .bind(new.client_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(asset)
    }

    pub async fn list_assets(&self) -> StoreResult<Vec<AssetWithClient>> {
        let rows = sqlx::query_as::<_, AssetClientRow>(
            "SELECT a.id, a.name, a.value, a.client_id, \
                    c.name AS client_name, c.email AS client_email, c.status AS client_status \
             FROM assets a JOIN clients c ON c.id = a.client_id \
             ORDER BY a.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AssetWithClient::from).collect())
    }

    /// Assets owned by one client; empty when the client does not exist.
    pub async fn list_client_assets(&self, client_id: i64) -> StoreResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>(&format!(
            "SELECT {} FROM assets WHERE client_id = ? ORDER BY id",
            ASSET_COLUMNS
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    /// Closes the connection handle.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

//! # REST API HTTP Server
//!
//! Axum routes for clients and assets.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::model::{Asset, AssetWithClient, Client, ClientWithAssets, ReferenceAsset};

use super::errors::{RestError, RestResult};
use super::handler::RecordsHandler;

/// REST API server state
pub struct RestServer {
    handler: Arc<RecordsHandler>,
}

impl RestServer {
    pub fn new(handler: RecordsHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/clients", get(list_clients_handler).post(create_client_handler))
            .route(
                "/clients/:id",
                get(get_client_handler)
                    .put(update_client_handler)
                    .delete(delete_client_handler),
            )
            .route("/clients/:id/assets", get(list_client_assets_handler))
            .route("/assets", get(list_assets_handler).post(create_asset_handler))
            .route("/assets-static", get(list_reference_assets_handler))
            .with_state(self.handler)
    }
}

/// Shared state type
type ServerState = Arc<RecordsHandler>;

/// Turns a JSON extraction failure into a 400 with our error shape
fn json_body(body: Result<Json<Value>, JsonRejection>) -> RestResult<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| RestError::InvalidBody(rejection.body_text()))
}

async fn create_client_handler(
    State(handler): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), RestError> {
    let body = json_body(body)?;
    let client = handler.create_client(&body).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

async fn list_clients_handler(
    State(handler): State<ServerState>,
) -> Result<Json<Vec<ClientWithAssets>>, RestError> {
    Ok(Json(handler.list_clients().await?))
}

async fn get_client_handler(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ClientWithAssets>, RestError> {
    Ok(Json(handler.get_client(&id).await?))
}

async fn update_client_handler(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Client>, RestError> {
    let body = json_body(body)?;
    Ok(Json(handler.update_client(&id, &body).await?))
}

async fn delete_client_handler(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RestError> {
    handler.delete_client(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_client_assets_handler(
    State(handler): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Asset>>, RestError> {
    Ok(Json(handler.list_client_assets(&id).await?))
}

async fn create_asset_handler(
    State(handler): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Asset>), RestError> {
    let body = json_body(body)?;
    let asset = handler.create_asset(&body).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

async fn list_assets_handler(
    State(handler): State<ServerState>,
) -> Result<Json<Vec<AssetWithClient>>, RestError> {
    Ok(Json(handler.list_assets().await?))
}

async fn list_reference_assets_handler(
    State(handler): State<ServerState>,
) -> Json<&'static [ReferenceAsset]> {
    Json(handler.list_reference_assets())
}

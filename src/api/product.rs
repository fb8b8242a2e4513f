//! Product catalogue endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::product::{BulkProductUpdate, Product, ProductRecord};
use crate::server::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub store_id: Option<i64>,
    pub status: Option<String>,
}

/// GET /api/v1/products - List products, optionally by store and status
#[tracing::instrument(name = "http.list_products", skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.products.read().await;

    let mut products = match query.store_id {
        Some(store_id) => catalog.list_by_store(store_id),
        None => catalog.list(),
    };

    if let Some(status) = query.status.as_deref() {
        products.retain(|p| p.record.status.as_ref().is_some_and(|s| s.to_text() == status));
    }

    Json(products)
}

/// GET /api/v1/products/{id}
#[tracing::instrument(name = "http.get_product", skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>> {
    Ok(Json(state.products.read().await.get(id)?))
}

/// POST /api/v1/products
#[tracing::instrument(name = "http.create_product", skip(state, record))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(record): Json<ProductRecord>,
) -> (StatusCode, Json<Product>) {
    let product = state.products.write().await.create(record);
    (StatusCode::CREATED, Json(product))
}

/// PUT /api/v1/products/{id}
#[tracing::instrument(name = "http.update_product", skip(state, record))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(record): Json<ProductRecord>,
) -> Result<Json<Product>> {
    Ok(Json(state.products.write().await.update(id, record)?))
}

/// DELETE /api/v1/products/{id}
#[tracing::instrument(name = "http.delete_product", skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>> {
    Ok(Json(state.products.write().await.delete(id)?))
}

/// PUT /api/v1/products/bulk - Update several products; unknown ids are skipped
#[tracing::instrument(name = "http.bulk_update_products", skip(state, updates), fields(count = updates.len()))]
pub async fn bulk_update_products(
    State(state): State<AppState>,
    Json(updates): Json<Vec<BulkProductUpdate>>,
) -> Json<Vec<Product>> {
    Json(state.products.write().await.bulk_update(updates))
}

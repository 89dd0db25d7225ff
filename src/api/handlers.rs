//! HTTP API handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::store::{Product, ProductInput, ProductPatch, ProductStore};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The product catalog store.
    pub store: Arc<ProductStore>,
    /// Prometheus exposition handle, present when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state around a store, without metrics exposition.
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "UP".
    #[schema(example = "UP")]
    pub status: String,
    /// Current time, RFC 3339.
    #[schema(example = "2026-08-25T12:00:00Z")]
    pub timestamp: String,
    /// Service identifier.
    #[schema(example = "product-service")]
    pub service: String,
}

/// Query parameters for product listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Only return products in this category (exact match).
    pub category: Option<String>,
}

/// Health check handler - always returns 200 with a timestamp.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> ApiResult<Json<HealthResponse>> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(anyhow::Error::from)?;

    Ok(Json(HealthResponse {
        status: "UP".to_string(),
        timestamp,
        service: "product-service".to_string(),
    }))
}

/// List all products, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ListQuery),
    responses((status = 200, description = "Product list", body = Vec<Product>))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    Json(state.store.list(query.category.as_deref()).await)
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Unknown product id", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Product>> {
    let product = state.store.get(id).await.ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

/// Create a new product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 400, description = "Missing required fields", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let new = input.validate().ok_or(ApiError::MissingFields)?;
    let product = state.store.create(new).await;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update an existing product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Unknown product id", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> ApiResult<Json<Product>> {
    let product = state
        .store
        .update(id, patch)
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

/// Delete a product by id.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Unknown product id", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Prometheus metrics exposition.
///
/// Answers with the generic route-not-found body when no recorder is
/// installed (tests build the router without one).
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "health",
    responses((status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain"))
)]
pub async fn metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let handle = state.metrics.as_ref().ok_or(ApiError::RouteNotFound)?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
        .into_response())
}

/// Fallback for unmatched routes.
pub async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_up_with_rfc3339_timestamp() {
        let response = health().await.unwrap();
        assert_eq!(response.0.status, "UP");
        assert_eq!(response.0.service, "product-service");
        assert!(OffsetDateTime::parse(&response.0.timestamp, &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn create_rejects_partial_input() {
        let state = AppState::new(Arc::new(ProductStore::with_seed()));
        let input = ProductInput {
            name: Some("Incomplete Product".to_string()),
            ..Default::default()
        };

        let result = create_product(State(state), Json(input)).await;
        assert!(matches!(result, Err(ApiError::MissingFields)));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let state = AppState::new(Arc::new(ProductStore::with_seed()));
        let result = delete_product(State(state), Path(999)).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }
}

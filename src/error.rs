//! Unified error types for the product service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// JSON error body returned to clients.
///
/// Messages keep the original service's Spanish wording for wire
/// compatibility.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[schema(example = "Producto no encontrado")]
    pub error: String,
}

/// Request-level error taxonomy.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A create request omitted one or more required fields.
    #[error("missing required fields: name, price, category, stock")]
    MissingFields,

    /// No product matches the requested id.
    #[error("product not found")]
    NotFound,

    /// No route matches the request path.
    #[error("no matching route")]
    RouteNotFound,

    /// Any uncaught failure inside a handler. The detail is logged
    /// server-side and never leaked to the client.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingFields => "Faltan campos requeridos: name, price, category, stock",
            ApiError::NotFound => "Producto no encontrado",
            ApiError::RouteNotFound => "Endpoint no encontrado",
            ApiError::Internal(_) => "Error interno del servidor",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            error!(error = %err, "unhandled error in request handler");
        }

        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Convenient Result type alias for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let err = ApiError::Internal(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.message(), "Error interno del servidor");
    }

    #[test]
    fn not_found_messages_are_distinct() {
        assert_eq!(ApiError::NotFound.message(), "Producto no encontrado");
        assert_eq!(ApiError::RouteNotFound.message(), "Endpoint no encontrado");
    }
}

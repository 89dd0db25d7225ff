//! OpenAPI document served through Swagger UI at `/docs`.

use utoipa::OpenApi;

use crate::api::handlers::HealthResponse;
use crate::error::ErrorBody;
use crate::store::{Product, ProductInput, ProductPatch};

/// OpenAPI description of the product service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RetailTech Product Service API",
        description = "Product catalog microservice for RetailTech e-commerce",
        version = "1.0.0"
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_products,
        crate::api::handlers::get_product,
        crate::api::handlers::create_product,
        crate::api::handlers::update_product,
        crate::api::handlers::delete_product,
        crate::api::handlers::metrics,
    ),
    components(schemas(Product, ProductInput, ProductPatch, HealthResponse, ErrorBody)),
    tags(
        (name = "health", description = "Service status"),
        (name = "products", description = "Product management"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_covers_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/products"));
        assert!(paths.contains_key("/api/products/{id}"));
        assert!(paths.contains_key("/metrics"));
    }

    #[test]
    fn openapi_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("RetailTech Product Service API"));
        assert!(json.contains("ProductInput"));
    }
}

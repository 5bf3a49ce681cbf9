//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OfertMatch API",
        version = "0.1.0",
        description = "Companies, products and promotional offers backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        crate::api::health::health_check,
        crate::api::health::readiness_check
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::health::ReadinessResponse
        ),
        responses(axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    nest(
        (path = "/api/companies", api = domain_companies::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/offers", api = domain_offers::ApiDoc)
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

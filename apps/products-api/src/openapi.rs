//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products REST API",
        version = "0.1.0",
        description = "Product catalog: create, read, update, toggle availability and delete"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_products::entity::URL, api = domain_products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

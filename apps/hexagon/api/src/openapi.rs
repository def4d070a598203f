//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hexagon API",
        version = "0.1.0",
        description = "User management and weather lookups over an in-memory store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/users", api = domain_users::handlers::ApiDoc),
        (path = "/api", api = domain_weather::handlers::ApiDoc)
    ),
    tags(
        (name = "Users", description = "User management endpoints (in-memory store)"),
        (name = "Weather", description = "Current weather lookups")
    )
)]
pub struct ApiDoc;

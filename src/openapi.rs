use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Served as JSON at `/api-docs/openapi.json` and rendered by Swagger UI at
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Welcome: `GET /`
/// - Health Check: `GET /api/health`
/// - Liveness: `GET /actuator/health`
///
/// # Schemas
/// - `HealthResponse`: Service status and build metadata
/// - `ActuatorHealth`: Liveness status
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home::home,
        crate::routes::health::health,
        crate::routes::actuator::actuator_health,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::health::ActuatorHealth
        )
    ),
    tags(
        (name = "Home", description = "Welcome message"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "ArtAc DevOps demo application",
        title = "ArtAc Demo API",
    )
)]
pub struct ApiDoc;

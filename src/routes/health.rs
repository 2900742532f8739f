use crate::build_info::BuildInfo;
use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp
/// and the build metadata of the running binary.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("UP"), `timestamp` in ISO 8601
///     format, `version`, `gitCommit` and `gitBranch`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "version": "0.1.0",
///   "gitCommit": "3f9c2ab",
///   "gitBranch": "main"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(build: web::Data<BuildInfo>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(&build))
}

/// # Route Configuration
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

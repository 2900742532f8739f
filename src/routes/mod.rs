use actix_web::web;

/// # Welcome Endpoint
///
/// `GET /` returns the plaintext welcome message.
pub mod home;

/// # Health Check Endpoint
///
/// Returns the current health status of the service, a timestamp and the
/// build metadata of the running binary.
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
pub mod health;

/// Operational liveness probe, `{"status":"UP"}`.
pub mod actuator;

/// # Route Configuration
///
/// ## Mounted Services
/// - Welcome message at the root (see [`home::configure_routes`])
/// - Health check under `/api` (see [`health::configure_routes`])
/// - Liveness probe under `/actuator` (see [`actuator::configure_routes`])
///
/// ## Endpoints
///
/// ```text
/// GET /                 - Welcome message
/// GET /api/health       - Service health status with build info
/// GET /actuator/health  - Liveness probe
/// ```
///
/// The health handler expects a `web::Data<BuildInfo>` registered on the app.
///
/// [`home::configure_routes`]: crate::routes::home::configure_routes
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`actuator::configure_routes`]: crate::routes::actuator::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::configure_routes)
        .service(web::scope("/api").configure(health::configure_routes))
        .service(web::scope("/actuator").configure(actuator::configure_routes));
}

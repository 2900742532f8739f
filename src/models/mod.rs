/// # Health Status Responses
///
/// Payloads for the health endpoints:
/// - [`HealthResponse`]: status, request timestamp and build metadata
///   (`GET /api/health`)
/// - [`ActuatorHealth`]: bare liveness status (`GET /actuator/health`)
///
/// [`HealthResponse`]: crate::models::health::HealthResponse
/// [`ActuatorHealth`]: crate::models::health::ActuatorHealth
pub mod health;

pub use health::{ActuatorHealth, HealthResponse};

use crate::models::ActuatorHealth;
use actix_web::{HttpResponse, Responder, get, web};

/// Liveness probe for orchestrators and load balancers.
#[utoipa::path(
    get,
    path = "/actuator/health",
    responses(
        (status = 200, description = "Service is alive", body = ActuatorHealth)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn actuator_health() -> impl Responder {
    HttpResponse::Ok().json(ActuatorHealth::up())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(actuator_health);
}

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get};

pub const WELCOME_MESSAGE: &str = "Welcome to ArtAc DevOps Demo Application";

/// # Welcome Endpoint
///
/// Returns the fixed plaintext welcome message.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
    tag = "Home"
)]
#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(WELCOME_MESSAGE)
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(home);
}

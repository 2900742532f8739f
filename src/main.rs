use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use artac_app::build_info::BuildInfo;
use artac_app::config::Config;
use artac_app::openapi::ApiDoc;
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// ArtAc Demo Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Welcome, health and liveness endpoints (configured in routes)
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Request logging through `env_logger` (`RUST_LOG`, default `info`)
///
/// # Endpoints
/// - Welcome: `/`
/// - Health: `/api/health`
/// - Liveness: `/actuator/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `SERVER_HOST` / `SERVER_PORT`, binding `0.0.0.0:8080` by default
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let build = Data::new(BuildInfo::from_build_env());

    info!("Starting ArtAc demo application, {}", *build);
    info!("Listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(build.clone())
            .configure(artac_app::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(config.bind_address())?
    .run()
    .await
}

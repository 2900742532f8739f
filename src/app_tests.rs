#[cfg(test)]
mod full_app_tests {
    use crate::build_info::BuildInfo;
    use crate::openapi::ApiDoc;
    use crate::routes;
    use actix_web::{App, test, web};
    use chrono::DateTime;
    use serde_json::Value;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    // Same wiring as `main`, minus the request logger.
    macro_rules! init_app {
        ($build:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($build))
                    .configure(routes::configure)
                    .service(
                        SwaggerUi::new("/swagger-ui/{_:.*}")
                            .url("/api-docs/openapi.json", ApiDoc::openapi()),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_home_returns_welcome_message() {
        let app = init_app!(BuildInfo::from_build_env());
        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("Welcome to ArtAc"));
        assert_eq!(body_str, "Welcome to ArtAc DevOps Demo Application");
    }

    #[actix_web::test]
    async fn test_api_health_returns_up_with_build_info() {
        let app = init_app!(BuildInfo::from_build_env());
        let req = test::TestRequest::get().uri("/api/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("\"status\":\"UP\""));
        assert!(body_str.contains("\"timestamp\""));

        let json: Value = serde_json::from_str(body_str).unwrap();
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["gitCommit"].is_string());
        assert!(json["gitBranch"].is_string());
    }

    #[actix_web::test]
    async fn test_api_health_timestamps_do_not_go_backwards() {
        let app = init_app!(BuildInfo::unknown());

        let mut previous = None;
        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/api/health").to_request();
            let json: Value = test::call_and_read_body_json(&app, req).await;

            let timestamp = json["timestamp"].as_str().expect("Timestamp should be a string");
            assert!(!timestamp.is_empty());
            let parsed = DateTime::parse_from_rfc3339(timestamp)
                .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");

            if let Some(earlier) = previous {
                assert!(parsed >= earlier, "{} went back in time", timestamp);
            }
            previous = Some(parsed);
        }
    }

    #[actix_web::test]
    async fn test_api_health_without_build_metadata() {
        let app = init_app!(BuildInfo::unknown());
        let req = test::TestRequest::get().uri("/api/health").to_request();

        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["status"], "UP");
        assert_eq!(json["version"], "unknown");
        assert_eq!(json["gitCommit"], "unknown");
        assert_eq!(json["gitBranch"], "unknown");
    }

    #[actix_web::test]
    async fn test_actuator_health_returns_up() {
        let app = init_app!(BuildInfo::unknown());
        let req = test::TestRequest::get().uri("/actuator/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("\"status\":\"UP\""));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = init_app!(BuildInfo::unknown());
        let req = test::TestRequest::get().uri("/api/status").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_openapi_document_is_served() {
        let app = init_app!(BuildInfo::unknown());
        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let json: Value = test::read_body_json(resp).await;
        assert!(json["paths"]["/api/health"].is_object());
        assert!(json["paths"]["/actuator/health"].is_object());
    }
}

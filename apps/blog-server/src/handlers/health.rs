//! Liveness check for load balancers and process supervisors.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /health
///
/// Answers without touching the record store.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, read_body};
    use actix_web::{App, web};

    use super::*;

    #[actix_rt::test]
    async fn test_health_reports_ok() {
        let app = actix_web::test::init_service(
            App::new().route("/health", web::get().to(health_check)),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(r#""status":"ok""#));
        assert!(body.contains(r#""service":"blog-server""#));
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
    }
}

//! API 라우트 설정 모듈
//!
//! 게이트웨이의 HTTP 엔드포인트들을 등록하고 CORS 정책을 구성합니다.
//!
//! # Routes
//!
//! - `POST /auth/callback` - OAuth 콜백 처리 (코드 교환 + 프로필 반환)
//! - `GET /auth/callbacks` - 진단용 수신 확인 (개발 환경 전용)
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use oauth_gateway_backend::routes::{configure_all_routes, configure_cors};
//!
//! let app = App::new()
//!     .wrap(configure_cors())
//!     .configure(configure_all_routes);
//! ```

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;
use serde_json::json;

use crate::config::{Environment, ServerConfig};
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 콜백 라우트를 설정합니다
///
/// 진단용 엔드포인트(`GET /auth/callbacks`)는 현재 실행 환경이
/// 프로덕션이 아닐 때만 등록됩니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    let mut scope = web::scope("/auth").service(handlers::auth::google_oauth_callback);

    if Environment::current().diagnostic_routes_enabled() {
        log::debug!("진단용 콜백 라우트 활성화: GET /auth/callbacks");
        scope = scope.service(handlers::auth::log_authorization_code);
    }

    cfg.service(scope);
}

/// CORS 설정을 구성합니다
///
/// 허용 목록에 포함된 오리진의 교차 출처 요청만 허용합니다.
/// 목록은 `CORS_ALLOWED_ORIGINS` 환경 변수로 재정의할 수 있으며,
/// 기본값은 배포된 웹 프론트엔드 오리진들과 로컬 개발 오리진입니다.
///
/// # Returns
///
/// * `Cors` - 구성된 CORS 미들웨어
pub fn configure_cors() -> Cors {
    let cors = ServerConfig::cors_allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "oauth_gateway_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "oauth_provider": "Google",
            "flow": "authorization_code"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "oauth_gateway_backend");
    }

    #[actix_web::test]
    async fn test_cors_allows_listed_origin() {
        let app = test::init_service(
            App::new()
                .wrap(configure_cors())
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/health")
            .insert_header((header::ORIGIN, "http://localhost:8080"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let allow_origin = resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());
        assert_eq!(allow_origin, Some("http://localhost:8080"));
    }

    #[actix_web::test]
    async fn test_cors_rejects_unlisted_origin() {
        let app = test::init_service(
            App::new()
                .wrap(configure_cors())
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/health")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        // 허용 목록 밖의 오리진은 preflight 단계에서 거부된다
        match test::try_call_service(&app, req).await {
            Ok(resp) => {
                assert!(resp.status().is_client_error());
                assert!(resp
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .is_none());
            }
            Err(err) => {
                let resp = err.error_response();
                assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            }
        }
    }
}

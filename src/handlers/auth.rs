//! Authentication HTTP Handlers
//!
//! OAuth 콜백과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - **콜백 처리**: `POST /auth/callback` - 코드 교환 후 프로필 반환
//! - **진단용 수신 확인**: `GET /auth/callbacks` - 개발 환경 전용

use actix_web::{get, post, web, Either, HttpResponse};
use validator::Validate;

use crate::domain::OAuthCallbackParams;
use crate::errors::AppError;
use crate::services::auth::GoogleAuthService;

/// 진단용 엔드포인트가 반환하는 고정 응답 문자열
pub const CALLBACK_ACK: &str = "Authorization code 수신 완료! 이 페이지를 닫으셔도 됩니다.";

/// Google OAuth 콜백 처리 핸들러
///
/// Authorization Code를 받아 액세스 토큰으로 교환하고,
/// Google UserInfo 응답을 가공 없이 반환합니다.
///
/// `code` 파라미터는 쿼리 스트링과 form-urlencoded 본문 어느 쪽으로도
/// 받을 수 있습니다 (Spring `@RequestParam`과 동일한 동작).
///
/// # Endpoint
/// `POST /auth/callback?code={code}`
///
/// # Responses
///
/// * `200 OK` - UserInfo 프로필 JSON 그대로
/// * `400 Bad Request` - `code`가 비어 있음
/// * `500 Internal Server Error` - 토큰 교환/프로필 조회 실패 (고정 에러 코드만 노출)
#[post("/callback")]
pub async fn google_oauth_callback(
    params: Either<web::Query<OAuthCallbackParams>, web::Form<OAuthCallbackParams>>,
) -> Result<HttpResponse, AppError> {
    let params = match params {
        Either::Left(query) => query.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    // 유효성 검사 - 빈 코드는 원격 호출 없이 거부
    params
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let google_service = GoogleAuthService::instance();
    let profile = google_service.handle_callback(&params.code).await?;

    log::info!("Google OAuth 콜백 처리 성공");
    Ok(HttpResponse::Ok().json(profile))
}

/// 진단용 Authorization Code 수신 확인 핸들러
///
/// 리다이렉트 플로우를 브라우저로 수동 테스트할 때 사용하는
/// 개발 환경 전용 엔드포인트입니다. 받은 코드를 로그에 남기고
/// 고정 안내 문구를 반환할 뿐, 어떤 외부 호출도 수행하지 않습니다.
///
/// 프로덕션 프로파일에서는 라우트가 등록되지 않습니다.
///
/// # Endpoint
/// `GET /auth/callbacks?code={code}`
#[get("/callbacks")]
pub async fn log_authorization_code(query: web::Query<OAuthCallbackParams>) -> HttpResponse {
    log::debug!("Authorization code 수신: {}", query.code);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(CALLBACK_ACK)
}

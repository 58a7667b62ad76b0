//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OAuth 게이트웨이를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 원칙
//!
//! 외부 서비스 장애, 토큰 누락, 역직렬화 실패를 서로 다른 변형으로
//! 구분하여 호출자가 메시지 문자열을 파싱하지 않고도 원인을 구별할 수
//! 있게 합니다. HTTP 응답에는 고정된 에러 코드만 노출하고, 상세 내용은
//! 서버 로그에만 기록합니다. 원본 예외 메시지를 클라이언트에 그대로
//! 흘려보내지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn exchange(code: &str) -> Result<TokenResponse, AppError> {
//!     let response = client.post(token_uri).form(&params).send().await
//!         .map_err(|e| AppError::ExternalServiceError(format!("토큰 요청 실패: {}", e)))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 게이트웨이에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 서비스 에러 - 네트워크 장애 또는 비 2xx 응답 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 토큰 교환 응답에 access_token이 없음 (500 Internal Server Error)
    ///
    /// 토큰 엔드포인트가 2xx를 반환했으나 본문에 `access_token` 필드가
    /// 없는 경우입니다. 외부 서비스 장애와 구분하여 보고합니다.
    #[error("Token exchange response did not contain an access token")]
    TokenMissing,

    /// 외부 응답 본문 역직렬화 실패 (500 Internal Server Error)
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출되는 고정 에러 코드를 반환합니다.
    ///
    /// 에러의 상세 메시지는 내부 로그에만 남기고, 응답 본문에는
    /// 이 코드만 포함됩니다.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::ExternalServiceError(_) => "external_service_error",
            AppError::TokenMissing => "missing_access_token",
            AppError::DeserializationError(_) => "deserialization_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 고정 에러 코드 JSON 응답으로
    /// 변환합니다. 상세 메시지는 서버 로그에만 기록됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", self.error_code(), self);
        } else {
            log::warn!("잘못된 요청 ({}): {}", self.error_code(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.error_code()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

//! Google OAuth 응답 DTO 모듈
//!
//! Google OAuth 2.0 토큰 엔드포인트 응답을 역직렬화하는 DTO를 정의합니다.
//! UserInfo 응답은 가공 없이 그대로 전달하므로 `serde_json::Value`를
//! 사용하며 별도 구조체를 두지 않습니다.

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 Access Token으로 교환할 때 Google이 반환하는
/// 데이터입니다. 이 서비스는 `access_token`만 소비하며, 나머지 필드는
/// 파싱만 하고 사용하지 않습니다.
///
/// `access_token`을 `Option`으로 선언하여 필드 누락을 역직렬화 실패가
/// 아닌 명시적인 검증 대상으로 처리합니다. 누락 시 서비스 계층이
/// `AppError::TokenMissing`으로 보고합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: Option<String>,
    /// 토큰 타입 (일반적으로 "Bearer")
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: Option<i64>,
    /// 리프레시 토큰 (선택사항)
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    pub scope: Option<String>,
}

//! # Google OAuth 2.0 콜백 처리 서비스
//!
//! Authorization Code를 액세스 토큰으로 교환하고 사용자 프로필을 조회하는
//! 서비스입니다. RFC 6749 OAuth 2.0 Authorization Code Grant 플로우의
//! 서버 사이드 절반을 구현합니다.
//!
//! ## 처리 플로우
//!
//! ```text
//! ┌─────────────┐                ┌─────────────────┐                ┌─────────────────┐
//! │  클라이언트   │                │   이 게이트웨이    │                │  Google OAuth   │
//! └─────────────┘                └─────────────────┘                └─────────────────┘
//!        │                                │                                  │
//!        │ 1. POST /auth/callback?code=x  │                                  │
//!        ├───────────────────────────────►│                                  │
//!        │                                │ 2. Exchange code for token       │
//!        │                                ├─────────────────────────────────►│
//!        │                                │ 3. access_token                  │
//!        │                                │◄─────────────────────────────────┤
//!        │                                │ 4. GET userinfo (Bearer token)   │
//!        │                                ├─────────────────────────────────►│
//!        │                                │ 5. user profile JSON             │
//!        │                                │◄─────────────────────────────────┤
//!        │ 6. 프로필 JSON 그대로 반환        │                                  │
//!        │◄───────────────────────────────┤                                  │
//! ```
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |

use once_cell::sync::Lazy;

use crate::config::GoogleOAuthConfig;
use crate::domain::GoogleTokenResponse;
use crate::errors::AppError;

static INSTANCE: Lazy<GoogleAuthService> = Lazy::new(GoogleAuthService::from_env);

/// Google OAuth 2.0 콜백 처리 서비스
///
/// 설정값은 생성 시점에 환경 변수에서 한 번 읽어 불변으로 유지합니다.
/// 요청 간 공유되는 가변 상태가 없으므로 프로세스 전역 싱글톤으로
/// 관리합니다. reqwest `Client`는 내부 커넥션 풀을 재사용합니다.
pub struct GoogleAuthService {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_uri: String,
    userinfo_uri: String,
}

impl GoogleAuthService {
    /// 명시적 설정값으로 서비스를 생성합니다.
    ///
    /// 테스트에서 토큰/UserInfo 엔드포인트를 모의 서버로 교체할 때
    /// 사용합니다. 프로덕션 경로에서는 [`Self::instance`]를 사용하세요.
    pub fn new(
        client_id: String,
        client_secret: String,
        redirect_uri: String,
        token_uri: String,
        userinfo_uri: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            redirect_uri,
            token_uri,
            userinfo_uri,
        }
    }

    /// 환경 변수 기반 설정으로 서비스를 생성합니다.
    ///
    /// # Panics
    ///
    /// 필수 환경 변수가 누락된 경우 패닉이 발생합니다.
    /// 서버 기동 시 `GoogleOAuthConfig::validate()`로 선검증하므로
    /// 정상 기동 이후에는 발생하지 않습니다.
    pub fn from_env() -> Self {
        Self::new(
            GoogleOAuthConfig::client_id(),
            GoogleOAuthConfig::client_secret(),
            GoogleOAuthConfig::redirect_uri(),
            GoogleOAuthConfig::token_uri(),
            GoogleOAuthConfig::userinfo_uri(),
        )
    }

    /// 프로세스 전역 싱글톤 인스턴스를 반환합니다.
    ///
    /// 첫 호출 시점에 환경 변수에서 설정을 읽어 초기화됩니다.
    pub fn instance() -> &'static GoogleAuthService {
        &INSTANCE
    }

    /// Authorization Code를 처리하여 사용자 프로필을 반환합니다.
    ///
    /// 콜백 핸들러의 핵심 연산입니다. 두 번의 순차적인 외부 호출을
    /// 수행합니다:
    ///
    /// 1. **토큰 교환**: Authorization Code → Access Token
    /// 2. **프로필 조회**: Access Token → UserInfo JSON
    ///
    /// 토큰 교환이 실패하면 UserInfo 호출은 수행하지 않습니다.
    /// 재시도, 캐싱, 상태 저장은 하지 않습니다.
    ///
    /// # Arguments
    ///
    /// * `code` - Google이 발급한 일회용 Authorization Code (불투명 문자열)
    ///
    /// # Returns
    ///
    /// * `Ok(serde_json::Value)` - UserInfo 응답 본문 그대로
    /// * `Err(AppError::ExternalServiceError)` - 네트워크 장애 또는 비 2xx 응답
    /// * `Err(AppError::TokenMissing)` - 토큰 응답에 access_token 없음
    /// * `Err(AppError::DeserializationError)` - 응답 본문 파싱 실패
    pub async fn handle_callback(&self, code: &str) -> Result<serde_json::Value, AppError> {
        // 1. Authorization code로 액세스 토큰 교환
        let token_response = self.exchange_code_for_token(code).await?;

        // 2. access_token 존재 검증
        // 원격 프로바이더가 2xx와 함께 토큰 없는 본문을 반환하는 경우를
        // 전송 장애와 구분하여 보고한다
        let access_token = token_response.access_token.ok_or(AppError::TokenMissing)?;

        // 3. 액세스 토큰으로 사용자 프로필 조회
        self.fetch_user_info(&access_token).await
    }

    /// Authorization Code를 Access Token으로 교환합니다.
    ///
    /// OAuth 2.0 토큰 엔드포인트에 form-urlencoded POST 요청을 보냅니다.
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=AUTHORIZATION_CODE&
    /// client_id=YOUR_CLIENT_ID&
    /// client_secret=YOUR_CLIENT_SECRET&
    /// redirect_uri=YOUR_REDIRECT_URI&
    /// grant_type=authorization_code
    /// ```
    ///
    /// 만료되었거나 이미 사용된 코드는 Google이 `invalid_grant`로
    /// 거부하며, 비 2xx 응답 본문은 `ExternalServiceError` 메시지에
    /// 보존되어 내부 로그로 전달됩니다.
    async fn exchange_code_for_token(&self, code: &str) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", code),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("redirect_uri", &self.redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패 ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| {
                AppError::DeserializationError(format!("Google 토큰 응답 파싱 실패: {}", e))
            })
    }

    /// Access Token으로 Google 사용자 프로필을 조회합니다.
    ///
    /// UserInfo 엔드포인트에 `Authorization: Bearer <token>` 헤더로
    /// GET 요청을 보내고, 응답 JSON을 가공 없이 반환합니다.
    /// 스코프에 따라 제공되는 필드가 달라지므로 구조를 고정하지 않습니다.
    async fn fetch_user_info(&self, access_token: &str) -> Result<serde_json::Value, AppError> {
        let response = self
            .http
            .get(&self.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패 ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| {
                AppError::DeserializationError(format!("Google 사용자 정보 파싱 실패: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server_uri: &str) -> GoogleAuthService {
        GoogleAuthService::new(
            "test-client-id".to_string(),
            "test-client-secret".to_string(),
            "http://localhost:8080/auth/callback".to_string(),
            format!("{}/token", server_uri),
            format!("{}/userinfo", server_uri),
        )
    }

    #[actix_web::test]
    async fn test_callback_returns_userinfo_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("code=VALIDCODE"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("client_id=test-client-id"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "T1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"email": "a@b.com", "name": "A"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server.uri());
        let profile = service.handle_callback("VALIDCODE").await.unwrap();

        assert_eq!(
            profile,
            serde_json::json!({"email": "a@b.com", "name": "A"})
        );
    }

    #[actix_web::test]
    async fn test_rejected_code_skips_userinfo_call() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "invalid_grant"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        // 토큰 교환이 실패하면 UserInfo는 호출되지 않아야 한다
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = service_for(&server.uri());
        let result = service.handle_callback("BADCODE").await;

        match result {
            Err(AppError::ExternalServiceError(msg)) => {
                // 프로바이더의 실패 상세는 내부 보고용으로 보존된다
                assert!(msg.contains("invalid_grant"));
            }
            other => panic!("ExternalServiceError 예상, 실제: {:?}", other.err()),
        }
    }

    #[actix_web::test]
    async fn test_token_response_without_access_token_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"token_type": "Bearer"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = service_for(&server.uri());
        let result = service.handle_callback("VALIDCODE").await;

        assert!(matches!(result, Err(AppError::TokenMissing)));
    }

    #[actix_web::test]
    async fn test_malformed_token_body_reports_deserialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
            .mount(&server)
            .await;

        let service = service_for(&server.uri());
        let result = service.handle_callback("VALIDCODE").await;

        assert!(matches!(result, Err(AppError::DeserializationError(_))));
    }

    #[actix_web::test]
    async fn test_userinfo_failure_is_external_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "T1"})),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let service = service_for(&server.uri());
        let result = service.handle_callback("VALIDCODE").await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}

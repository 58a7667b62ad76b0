//! # OAuth Configuration Module
//!
//! Google OAuth 2.0 클라이언트 설정을 관리하는 모듈입니다.
//! Spring Security의 `spring.security.oauth2.client.registration.google`
//! 설정과 동일한 역할을 수행합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="https://yourapp.com/auth/callback"
//! ```
//!
//! ## 보안 고려사항
//!
//! - `client_secret`은 절대 소스 코드나 로그에 노출되어서는 안 됩니다
//! - 프로덕션에서는 HTTPS redirect URI만 사용하세요
//! - 필수 설정값이 누락되면 [`GoogleOAuthConfig::validate`]가 기동 단계에서
//!   누락된 변수명을 보고하고 서버는 시작하지 않습니다

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
/// 모든 값은 환경 변수에서 읽으며, 토큰/UserInfo 엔드포인트는
/// 일반적으로 변경할 필요가 없으므로 기본값을 제공합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    /// 서버 기동 시 [`Self::validate`]를 먼저 호출하므로 런타임 중에
    /// 패닉이 발생하는 일은 없습니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID")
            .expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 이 값은 서버 사이드에서만 사용되며, 토큰 교환 요청에만 포함됩니다.
    /// 로그에 출력하지 마세요.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록된 값과
    /// 일치해야 토큰 교환이 성공합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 인증 코드를 액세스 토큰으로 교환할 때 사용되는 URL 입니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google UserInfo 엔드포인트 URI를 반환합니다.
    ///
    /// 액세스 토큰으로 사용자 프로필을 조회할 때 사용되는 URL 입니다.
    ///
    /// # 기본값
    ///
    /// `https://www.googleapis.com/oauth2/v2/userinfo`
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }

    /// 필수 환경 변수가 모두 설정되어 있는지 검증합니다.
    ///
    /// 서버 기동 시 한 번 호출하여 설정 누락을 조기에 발견합니다.
    /// 런타임 중 첫 콜백 요청에서야 패닉으로 실패하는 것을 방지합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 모든 필수 변수가 설정됨
    /// * `Err(Vec<&str>)` - 누락된 환경 변수 이름 목록
    pub fn validate() -> Result<(), Vec<&'static str>> {
        let required = [
            "GOOGLE_CLIENT_ID",
            "GOOGLE_CLIENT_SECRET",
            "GOOGLE_REDIRECT_URI",
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|name| env::var(name).map(|v| v.is_empty()).unwrap_or(true))
            .copied()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_uri_default() {
        if env::var("GOOGLE_TOKEN_URI").is_err() {
            assert_eq!(
                GoogleOAuthConfig::token_uri(),
                "https://oauth2.googleapis.com/token"
            );
        }
    }

    #[test]
    fn test_userinfo_uri_default() {
        if env::var("GOOGLE_USERINFO_URI").is_err() {
            assert_eq!(
                GoogleOAuthConfig::userinfo_uri(),
                "https://www.googleapis.com/oauth2/v2/userinfo"
            );
        }
    }
}

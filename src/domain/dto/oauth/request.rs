//! OAuth 콜백 요청 관련 DTO
//!
//! 콜백 엔드포인트로 전달되는 파라미터를 매핑합니다.

use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 파라미터 구조체
///
/// `POST /auth/callback`의 쿼리 스트링 또는 form-urlencoded 본문에서
/// 역직렬화됩니다. Authorization Code는 불투명 문자열로 취급하며
/// 비어 있지 않은지만 검증합니다. 형식 검증은 원격 프로바이더가
/// 수행합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackParams {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_fails_validation() {
        let params = OAuthCallbackParams {
            code: String::new(),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_opaque_code_passes_validation() {
        // 코드의 내부 구조는 검사하지 않는다
        let params = OAuthCallbackParams {
            code: "4/0AX4XfWh-not-a-real-code".to_string(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_query_string() {
        let params: OAuthCallbackParams =
            serde_urlencoded::from_str("code=VALIDCODE").unwrap();
        assert_eq!(params.code, "VALIDCODE");
    }
}

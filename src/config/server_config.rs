//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 서버 바인딩 주소, 실행 프로파일, CORS 오리진 허용 목록을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// Spring Profile과 유사하게 `PROFILE` 환경 변수로 구분합니다.
/// 진단용 라우트(`GET /auth/callbacks`)는 프로덕션 환경에서 등록되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 진단 라우트 활성화
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 프로덕션 환경 - 진단 라우트 비활성화
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `PROFILE` 환경 변수를 확인하며, 설정되지 않은 경우
    /// 안전한 기본값으로 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("PROFILE").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    /// 진단용 콜백 로깅 라우트를 등록할지 여부를 반환합니다.
    ///
    /// 프로덕션에서는 브라우저 수동 테스트용 엔드포인트를 노출하지 않습니다.
    pub fn diagnostic_routes_enabled(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 및 CORS 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// HTTP 워커 스레드 수를 반환합니다.
    ///
    /// # Returns
    ///
    /// 워커 수. 기본값: 4
    pub fn worker_count() -> usize {
        env::var("WORKER_COUNT")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .unwrap_or(4)
    }

    /// CORS 오리진 허용 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS` 환경 변수의 쉼표 구분 목록을 파싱합니다.
    /// 설정되지 않은 경우 배포 기본값(프로덕션 웹 오리진 2개와
    /// 로컬 개발 오리진 1개)을 사용합니다.
    ///
    /// # Examples
    ///
    /// ```bash
    /// export CORS_ALLOWED_ORIGINS="https://app.example.com,http://localhost:3000"
    /// ```
    pub fn cors_allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => vec![
                "https://expensetrackinghub.expense-tracking.com".to_string(),
                "https://expensetrackinghub-95d6abf7a695.herokuapp.com".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }

    /// 쉼표 구분 오리진 목록 문자열을 파싱합니다.
    ///
    /// 항목 앞뒤 공백은 제거되며 빈 항목은 무시됩니다.
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

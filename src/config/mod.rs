//! # Configuration Module
//!
//! 게이트웨이 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 서버 바인딩, 실행 환경, CORS 허용 목록 설정
//! - [`oauth_config`] - Google OAuth 클라이언트 및 엔드포인트 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 보안 우선 (Security First)
//!
//! - 클라이언트 ID/Secret 등 민감한 정보는 환경 변수로만 제공
//! - 소스 코드에 어떤 자격 증명도 포함하지 않음
//! - 필수 설정값 누락 시 서버 기동 단계에서 즉시 실패
//!
//! ### 2. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사하게 `PROFILE` 환경 변수로 구분합니다.

pub mod oauth_config;
pub mod server_config;

pub use oauth_config::GoogleOAuthConfig;
pub use server_config::{Environment, ServerConfig};

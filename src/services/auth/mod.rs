//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 Authorization Code 플로우의 서버 사이드 절반을
//! 담당하는 서비스를 제공합니다.
//!
//! # Security
//!
//! - Client Secret은 토큰 교환 요청에만 사용되며 로그에 남기지 않음
//! - 액세스 토큰은 응답 경로에 포함되지 않고 UserInfo 호출에만 사용
//! - 모든 OAuth 통신은 HTTPS 엔드포인트 대상

pub mod google_auth_service;

pub use google_auth_service::*;

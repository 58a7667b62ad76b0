//! Google OAuth2 콜백 게이트웨이 백엔드
//!
//! Google OAuth 2.0 Authorization Code를 액세스 토큰으로 교환하고,
//! Google UserInfo API에서 조회한 사용자 프로필을 호출자에게 그대로
//! 전달하는 얇은 HTTP 게이트웨이 서비스입니다.
//!
//! # Features
//!
//! - **토큰 교환**: Authorization Code → Access Token (Google 토큰 엔드포인트)
//! - **프로필 조회**: Bearer 토큰으로 UserInfo 엔드포인트 호출, 응답 그대로 반환
//! - **CORS 허용 목록**: 고정된 오리진 허용 목록 기반 교차 출처 제어
//! - **환경 변수 설정**: 클라이언트 ID/Secret 등 민감 정보는 환경 변수로만 주입
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   HTTP Routes    │ ← /auth/callback, /auth/callbacks, /health
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │     Handlers     │ ← 요청 파라미터 추출 및 응답 변환
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ GoogleAuthService │ ← 토큰 교환 + 프로필 조회 (reqwest)
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Google OAuth2   │ ← 외부 REST 엔드포인트 2개
//! └──────────────────┘
//! ```
//!
//! 의도적으로 상태를 가지지 않습니다. 세션 관리, 토큰 저장/갱신,
//! 영속 계층은 이 서비스의 범위가 아닙니다.

pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;

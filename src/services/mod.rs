//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 OAuth 프로바이더와의 통신을 담당하는 서비스를 제공합니다.
//! 서비스는 프로세스 전역 싱글톤으로 관리되며, 설정값은 생성 시점에
//! 한 번 읽어 불변으로 유지합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::GoogleAuthService;
//!
//! let google_auth = GoogleAuthService::instance();
//! let profile = google_auth.handle_callback(&code).await?;
//! ```

pub mod auth;

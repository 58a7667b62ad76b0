//! # Domain Layer Module
//!
//! API 경계에서 주고받는 데이터 계약을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody` / `@ResponseBody` DTO 계층과
//! 동일한 역할을 수행합니다.
//!
//! 이 서비스는 영속 엔티티를 가지지 않으므로 도메인 계층은 DTO로만
//! 구성됩니다. 요청 단위로 생성되고 응답과 함께 소멸합니다.

pub mod dto;

pub use dto::oauth::request::OAuthCallbackParams;
pub use dto::oauth::response::GoogleTokenResponse;

//! OAuth 콜백 플로우 관련 DTO 모듈

pub mod request;
pub mod response;

//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! 핸들러는 파라미터 추출과 응답 변환만 담당하고,
//! OAuth 플로우 자체는 서비스 계층에 위임합니다.

pub mod auth;

//! # Data Transfer Objects (DTO) Module
//!
//! 클라이언트 및 외부 OAuth 프로바이더와의 데이터 계약을 정의합니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestParam` | `request` 모듈 | 콜백 쿼리/폼 파라미터 매핑 |
//! | `ResponseEntity<Map>` | `response` 모듈 | 외부 API 응답 역직렬화 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |

pub mod oauth;

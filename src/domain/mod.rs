//! # Domain Layer Module
//!
//! API 클라이언트와 라우트 가드가 사용하는 도메인 타입을 모은 모듈입니다.
//!
//! - [`models`] - 세션 클레임, 토큰 쌍, 라우트 테이블, 언어
//! - [`dto`] - 백엔드 API 요청/응답 구조체

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;

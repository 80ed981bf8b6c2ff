//! 인증 및 접근 제어 서비스 모듈
//!
//! 세션 자격 증명 해석과 라우트 접근 정책을 제공합니다.
//!
//! # Features
//!
//! - 세션 JWT 디코딩 (선택적 HS256 서명 검증)
//! - 만료 시간(`exp`) 확인
//! - 선언적 라우트 테이블 기반 통과/리디렉션 결정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{RoutePolicy, GuardDecision};
//!
//! let policy = RoutePolicy::default();
//! match policy.evaluate("/orders", cookie.as_deref(), now) {
//!     GuardDecision::Redirect { location } => { /* 307 → location */ }
//!     _ => { /* 계속 진행 */ }
//! }
//! ```

pub mod session_decoder;
pub mod route_policy;

pub use session_decoder::*;
pub use route_policy::*;

//! 미들웨어 모듈
//!
//! 엣지 서버 요청 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 라우트 가드 (RouteGuard)
//! - 세션 쿠키 기반 보호 경로 접근 제어
//! - 비인증 접근 시 `/login?redirect=<경로>`로 307 리디렉션
//! - 자산, API 프록시, 파일 요청은 평가 없이 통과
//! - 유효한 세션의 클레임을 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::RouteGuard;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(RouteGuard::from_config(&GuardConfig::from_env()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod route_guard;
mod route_guard_inner;

pub use route_guard::RouteGuard;

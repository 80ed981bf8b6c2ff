//! # HTTP Request Handlers Module
//!
//! 엣지 서버의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ```text
//! Browser ──► RouteGuard ──┬─► /health            (health)
//!                          ├─► /api/proxy/{tail}  (proxy → BACKEND_URL)
//!                          └─► 그 외 화면 경로     (page)
//! ```
//!
//! 에러는 [`AppError`](crate::errors::AppError)의 `ResponseError` 구현을 통해
//! `{ "success": false, "message": ... }` JSON으로 변환됩니다.

pub mod health;
pub mod page;
pub mod proxy;

pub use health::*;
pub use page::*;
pub use proxy::*;

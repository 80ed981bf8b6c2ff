//! 서비스 계층 모듈
//!
//! - `auth`: 세션 자격 증명 해석과 라우트 접근 정책
//! - `marketplace`: API 클라이언트 위의 리소스별 서비스
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::RoutePolicy, marketplace::VoucherService};
//!
//! let policy = RoutePolicy::default();
//! let vouchers = VoucherService::new(&client).list().await?;
//! ```

pub mod auth;
pub mod marketplace;

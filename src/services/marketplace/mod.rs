//! 마켓플레이스 리소스 서비스 모듈
//!
//! [`ApiClient`](crate::client::ApiClient) 위에서 리소스별 엔드포인트를 타입으로 감싼 얇은 계층입니다.
//! 모든 호출은 백엔드 응답 래퍼 `{ success, data, message }`의 `data`만 반환하며,
//! 인증 복구는 클라이언트가 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::marketplace::VoucherService;
//!
//! let result = VoucherService::new(&client).check("HEMAT10", 150_000.0).await?;
//! ```

pub mod banner_service;
pub mod setting_service;
pub mod upload_service;
pub mod voucher_service;
pub mod review_service;
pub mod region_service;

pub use banner_service::*;
pub use setting_service::*;
pub use upload_service::*;
pub use voucher_service::*;
pub use review_service::*;
pub use region_service::*;

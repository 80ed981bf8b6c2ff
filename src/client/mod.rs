//! 인증 API 클라이언트 모듈
//!
//! 모든 백엔드 호출의 단일 창구입니다. 자격 증명과 언어 헤더를 부착하고,
//! 401 응답 시 토큰을 한 번만 갱신하여 대기 중인 요청을 함께 재전송합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::client::ApiClient;
//!
//! let client = ApiClient::from_env()?;
//! let banners: serde_json::Value = client.get("/banners").await?;
//! ```

pub mod api_client;
pub mod navigator;
pub mod refresh;
pub mod request;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use api_client::*;
pub use navigator::*;
pub use refresh::*;
pub use request::*;
pub use transport::*;

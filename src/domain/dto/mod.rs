//! # Data Transfer Objects
//!
//! 백엔드 API와 주고받는 요청/응답 구조체를 정의합니다.
//!
//! - [`tokens`] - 토큰 갱신 요청, 공통 응답 래퍼
//! - [`marketplace`] - 배너, 설정, 업로드, 바우처, 리뷰, 지역

pub mod tokens;
pub mod marketplace;

pub use tokens::*;
pub use marketplace::*;

//! # Domain Models
//!
//! 세션 자격 증명 클레임, 라우트 분류 규칙, 언어 설정 등
//! 클라이언트와 가드가 공유하는 값 객체를 정의합니다.

pub mod token;
pub mod route;
pub mod locale;

pub use token::*;
pub use route::*;
pub use locale::*;

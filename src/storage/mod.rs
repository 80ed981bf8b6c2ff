//! 자격 증명 저장소 모듈
//!
//! API 클라이언트가 세션/리프레시 토큰과 언어 설정을 보관하는 로컬 저장소입니다.
//! 라우트 가드가 읽는 쿠키와는 별개의 복사본입니다.

pub mod credential_store;

pub use credential_store::*;

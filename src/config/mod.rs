//! # Configuration Module
//!
//! 엣지 서버와 API 클라이언트의 설정을 환경 변수 기반으로 관리하는 모듈입니다.
//! `.env` 파일은 바이너리 시작 시 `PROFILE`에 따라 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`api_config`] - 백엔드 API 기본 URL, 타임아웃, 저장소 키
//! - [`server_config`] - 서버 바인딩, 프록시, 라우트 가드, Rate Limiting
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # API 클라이언트
//! export API_BASE_URL="https://api.posko.id/api"
//! export REFRESH_WAIT_TIMEOUT_SECS="30"
//!
//! # 엣지 서버
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export BACKEND_URL="https://api.posko.id"
//! export SESSION_COOKIE="posko_token"
//! ```

pub mod api_config;
pub mod server_config;

pub use api_config::*;
pub use server_config::*;

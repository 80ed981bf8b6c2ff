//! 포스코 마켓플레이스 엣지
//!
//! 마켓플레이스 프런트엔드의 인증 관련 두 축을 제공합니다.
//!
//! # Features
//!
//! - **인증 API 클라이언트**: 자격 증명/언어 헤더 자동 부착, 401 시 단일 토큰 갱신과
//!   대기 요청 재전송, 갱신 실패 시 강제 로그아웃
//! - **라우트 가드**: 세션 쿠키 기반 보호 경로 접근 제어 (`/login?redirect=` 리디렉션)
//! - **엣지 서버**: 헬스체크, 백엔드 리버스 프록시, 페이지 셸
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐        ┌──────────────────┐
//! │   RouteGuard     │        │    ApiClient     │ ← 리소스 서비스 (services::marketplace)
//! │  (middlewares)   │        │     (client)     │
//! └────────┬─────────┘        └────────┬─────────┘
//!          │ RoutePolicy               │ RefreshCoordinator / HttpTransport
//!          ▼                           ▼
//! ┌──────────────────┐        ┌──────────────────┐
//! │  SessionDecoder  │        │ CredentialStore  │ ← 토큰, 언어 설정 (storage)
//! └──────────────────┘        └──────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use posko_edge::client::ApiClient;
//! use posko_edge::services::marketplace::BannerService;
//!
//! let client = ApiClient::from_env()?;
//! let banners = BannerService::new(&client).list().await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod client;
pub mod services;
pub mod middlewares;
pub mod handlers;
pub mod routes;

//! 엣지 서버 설정 관리 모듈
//!
//! 서버 바인딩, 백엔드 프록시, 라우트 가드, CORS, Rate Limiting 설정을 관리합니다.

use std::env;

use log::error;

use crate::config::api_config::{trim_trailing_slashes, StorageKeys};

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 3000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 백엔드 리버스 프록시 설정
///
/// `/api/proxy/*` 요청을 `<BACKEND_URL>/*`로 전달합니다.
pub struct ProxyConfig;

impl ProxyConfig {
    /// 프록시 경로 접두사
    pub const PREFIX: &'static str = "/api/proxy";

    /// 백엔드 URL (끝 슬래시 제거). 기본값: `http://localhost:5000`
    pub fn backend_url() -> String {
        let raw = env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        trim_trailing_slashes(&raw)
    }
}

/// 라우트 가드 설정
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// 세션 자격 증명 쿠키 이름
    pub cookie_name: String,
    /// 로그인 경로
    pub login_path: String,
    /// 서명 검증용 HMAC 비밀키 (없으면 서명 검증 없이 디코딩만 수행)
    pub jwt_secret: Option<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            cookie_name: StorageKeys::ACCESS_TOKEN.to_string(),
            login_path: "/login".to_string(),
            jwt_secret: None,
        }
    }
}

impl GuardConfig {
    /// 환경 변수 기반 가드 설정
    ///
    /// - `SESSION_COOKIE`: 쿠키 이름 (기본값 `posko_token`)
    /// - `LOGIN_PATH`: 로그인 경로 (기본값 `/login`)
    /// - `JWT_SECRET`: 설정 시 HS256 서명까지 검증
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cookie_name: env::var("SESSION_COOKIE").unwrap_or(defaults.cookie_name),
            login_path: env::var("LOGIN_PATH").unwrap_or(defaults.login_path),
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
        }
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분). 기본값: 로컬 개발 서버
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());
        raw.split(',')
            .map(|origin| trim_trailing_slashes(origin.trim()))
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

//! # API Client Configuration Module
//!
//! 백엔드 REST API 호출과 클라이언트 측 자격 증명 저장에 관련된 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export API_BASE_URL="https://api.posko.id/api"
//! export API_REQUEST_TIMEOUT_SECS="30"
//! export REFRESH_WAIT_TIMEOUT_SECS="30"
//! export LOGIN_PATH="/login"
//! export CREDENTIAL_STORE_PATH="/var/lib/posko/session.json"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ApiConfig, ClientConfig};
//!
//! let base = ApiConfig::base_url();
//! let config = ClientConfig::from_env();
//! ```

use std::env;
use std::time::Duration;

use log::error;

/// 저장소 키 상수
///
/// 브라우저 버전과 같은 키 이름을 사용하여 세션 데이터를 공유할 수 있게 합니다.
pub struct StorageKeys;

impl StorageKeys {
    /// 액세스 토큰 키 (쿠키 이름과 동일)
    pub const ACCESS_TOKEN: &'static str = "posko_token";
    /// 리프레시 토큰 키
    pub const REFRESH_TOKEN: &'static str = "posko_refresh_token";
    /// 언어 설정 키 (`id` | `en`)
    pub const LOCALE: &'static str = "posko_lang";

    /// 파일 기반 자격 증명 저장소 경로
    ///
    /// 설정되지 않은 경우 메모리 저장소를 사용합니다.
    pub fn store_path() -> Option<String> {
        env::var("CREDENTIAL_STORE_PATH").ok().filter(|p| !p.trim().is_empty())
    }
}

/// 백엔드 API 설정
pub struct ApiConfig;

impl ApiConfig {
    /// 백엔드 REST API 기본 URL
    ///
    /// 끝의 슬래시는 제거되어 반환됩니다.
    ///
    /// # 기본값
    ///
    /// `http://localhost:5000/api`
    pub fn base_url() -> String {
        let raw = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        trim_trailing_slashes(&raw)
    }

    /// 개별 요청 타임아웃 (초). 기본값: 30
    pub fn request_timeout_secs() -> u64 {
        parse_secs("API_REQUEST_TIMEOUT_SECS", env::var("API_REQUEST_TIMEOUT_SECS").ok(), 30)
    }

    /// 토큰 갱신을 기다리는 대기열 요청의 최대 대기 시간 (초). 기본값: 30
    pub fn refresh_wait_timeout_secs() -> u64 {
        parse_secs("REFRESH_WAIT_TIMEOUT_SECS", env::var("REFRESH_WAIT_TIMEOUT_SECS").ok(), 30)
    }

    /// 로그인 진입 경로. 기본값: `/login`
    pub fn login_path() -> String {
        env::var("LOGIN_PATH").unwrap_or_else(|_| "/login".to_string())
    }
}

/// API 클라이언트 인스턴스 설정
///
/// 환경 변수 대신 직접 값을 지정할 수 있어 테스트에서 여러 클라이언트를
/// 서로 다른 설정으로 만들 수 있습니다.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 백엔드 기본 URL (끝 슬래시 없음)
    pub base_url: String,
    /// 로그인 진입 경로
    pub login_path: String,
    /// 개별 요청 타임아웃
    pub request_timeout: Duration,
    /// 갱신 대기열 최대 대기 시간
    pub refresh_wait_timeout: Duration,
}

impl ClientConfig {
    /// 지정한 기본 URL과 기본 타임아웃으로 설정 생성
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_trailing_slashes(base_url),
            login_path: "/login".to_string(),
            request_timeout: Duration::from_secs(30),
            refresh_wait_timeout: Duration::from_secs(30),
        }
    }

    /// 환경 변수 기반 설정 생성
    pub fn from_env() -> Self {
        Self {
            base_url: ApiConfig::base_url(),
            login_path: ApiConfig::login_path(),
            request_timeout: Duration::from_secs(ApiConfig::request_timeout_secs()),
            refresh_wait_timeout: Duration::from_secs(ApiConfig::refresh_wait_timeout_secs()),
        }
    }

    /// 갱신 대기 시간 변경
    pub fn with_refresh_wait_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_wait_timeout = timeout;
        self
    }

    /// 로그인 경로 변경
    pub fn with_login_path(mut self, path: &str) -> Self {
        self.login_path = path.to_string();
        self
    }

    /// 기본 URL과 경로를 결합합니다.
    ///
    /// 이미 절대 URL인 경로는 그대로 사용합니다.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// URL 끝의 슬래시를 모두 제거합니다.
pub fn trim_trailing_slashes(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// 초 단위 설정값 해석. 값이 없으면 기본값, 숫자가 아니면 에러 로그 후 기본값
fn parse_secs(name: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        Some(value) => value.trim().parse::<u64>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        None => default,
    }
}

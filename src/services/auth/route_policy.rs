//! 라우트 접근 정책
//!
//! 요청 경로와 세션 쿠키만으로 통과/리디렉션을 결정하는 순수 함수 계층입니다.
//! 요청 간에 어떤 상태도 공유하지 않으며, 미들웨어는 이 결정을 HTTP 응답으로 옮기기만 합니다.
//!
//! ## 평가 순서
//!
//! 1. 우회 경로(자산, API 프록시, 파일)는 더 이상 평가하지 않고 통과
//! 2. 보호 경로이면서 유효한 세션이 없으면 `/login?redirect=<경로>`로 리디렉션
//! 3. 그 외(공개 경로, 미분류 경로)는 모두 허용

use log::debug;

use crate::config::GuardConfig;
use crate::domain::models::route::route_rule::{normalize_path, RouteClass, RouteTable};
use crate::domain::models::token::token::SessionClaims;
use crate::services::auth::session_decoder::SessionDecoder;

/// 가드 결정
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 평가 없이 통과 (자산, API, 파일)
    Bypass,
    /// 요청 진행 허용
    Allow,
    /// 로그인 페이지로 리디렉션
    Redirect { location: String },
}

/// 라우트 접근 정책
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    table: RouteTable,
    decoder: SessionDecoder,
    login_path: String,
}

impl RoutePolicy {
    pub fn new(table: RouteTable, decoder: SessionDecoder, login_path: &str) -> Self {
        Self {
            table,
            decoder,
            login_path: login_path.to_string(),
        }
    }

    /// 가드 설정과 마켓플레이스 기본 테이블로 정책 생성
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(
            RouteTable::marketplace(),
            SessionDecoder::new(config.jwt_secret.clone()),
            &config.login_path,
        )
    }

    /// 쿠키 자격 증명을 해석합니다.
    ///
    /// 디코딩 실패와 만료는 모두 `None`(비인증)으로 취급되며 에러를 던지지 않습니다.
    pub fn authenticate(&self, credential: Option<&str>, now: i64) -> Option<SessionClaims> {
        let token = credential.filter(|t| !t.is_empty())?;
        match self.decoder.decode_active(token, now) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("세션 쿠키 무시: {}", e);
                None
            }
        }
    }

    /// 경로와 자격 증명으로 접근을 결정합니다.
    ///
    /// # Arguments
    ///
    /// * `path` - 요청 경로 (쿼리 문자열 제외)
    /// * `credential` - 세션 쿠키 값
    /// * `now` - 현재 시각 (Unix 초)
    ///
    /// 경로는 정규화된 형태로 분류되며, 리디렉션 대상에도 정규화된 경로가 담깁니다.
    pub fn evaluate(&self, path: &str, credential: Option<&str>, now: i64) -> GuardDecision {
        let path = normalize_path(path);
        let path = path.as_str();
        match self.table.classify(path) {
            Some(RouteClass::Bypass) => GuardDecision::Bypass,
            Some(RouteClass::Protected) => {
                if self.authenticate(credential, now).is_some() {
                    GuardDecision::Allow
                } else {
                    let location = self.login_redirect(path);
                    debug!("보호 경로 비인증 접근: {} → {}", path, location);
                    GuardDecision::Redirect { location }
                }
            }
            Some(RouteClass::Public) | None => GuardDecision::Allow,
        }
    }

    /// 원래 경로를 `redirect` 파라미터로 담은 로그인 URL
    ///
    /// 경로 구분자 `/`는 그대로 두고 나머지 문자만 인코딩합니다.
    pub fn login_redirect(&self, path: &str) -> String {
        let encoded = urlencoding::encode(path).replace("%2F", "/");
        format!("{}?redirect={}", self.login_path, encoded)
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::from_config(&GuardConfig::default())
    }
}

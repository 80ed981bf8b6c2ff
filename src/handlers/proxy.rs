//! 백엔드 리버스 프록시 핸들러
//!
//! `/api/proxy/{tail}` 요청을 메서드, 쿼리, 본문, 헤더 그대로 `<BACKEND_URL>/{tail}`로
//! 전달하고 응답 상태와 헤더, 본문을 돌려줍니다. 업스트림에 연결하지 못하면 502를 반환합니다.

use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, error};

use crate::config::{trim_trailing_slashes, ProxyConfig};
use crate::errors::{AppError, AppResult};

/// 전달하지 않는 hop-by-hop 헤더
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// 본문 길이는 양쪽 HTTP 구현이 다시 계산함
fn is_forwardable(name: &str) -> bool {
    !is_hop_by_hop(name) && !name.eq_ignore_ascii_case("content-length")
}

/// 프록시 대상 백엔드와 HTTP 클라이언트
#[derive(Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    backend_url: String,
}

impl ProxyClient {
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트 초기화 실패
    pub fn new(backend_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AppError::ConfigError(format!("프록시 클라이언트 생성 실패: {}", e)))?;
        Ok(Self {
            client,
            backend_url: trim_trailing_slashes(backend_url),
        })
    }

    /// `BACKEND_URL` 기반 프록시 클라이언트
    pub fn from_env(timeout: Duration) -> AppResult<Self> {
        Self::new(&ProxyConfig::backend_url(), timeout)
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// 전달 대상 URL (쿼리 문자열 포함)
    ///
    /// `tail`은 인코딩된 원문 그대로 이어 붙입니다.
    fn target_url(&self, tail: &str, query: &str) -> String {
        let mut url = format!("{}/{}", self.backend_url, tail.trim_start_matches('/'));
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

/// 프록시 접두사 뒤의 경로 (퍼센트 인코딩 유지)
///
/// 디코딩된 경로 파라미터를 쓰면 `%23`, `%3F`가 URL 구분자로 바뀌므로 요청 URI 원문에서 잘라냅니다.
fn raw_tail(req: &HttpRequest) -> &str {
    req.uri()
        .path()
        .strip_prefix(ProxyConfig::PREFIX)
        .unwrap_or_default()
}

/// 프록시 핸들러
///
/// # Endpoint
/// `ANY /api/proxy/{tail:.*}`
pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    proxy: web::Data<ProxyClient>,
) -> Result<HttpResponse, AppError> {
    let url = proxy.target_url(raw_tail(&req), req.query_string());
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|e| AppError::ValidationError(format!("지원하지 않는 메서드: {}", e)))?;

    let mut builder = proxy.client.request(method.clone(), &url);
    for (name, value) in req.headers().iter() {
        if !is_forwardable(name.as_str()) {
            continue;
        }
        builder = builder.header(name.as_str(), value.as_bytes());
    }
    if !body.is_empty() {
        builder = builder.body(body.to_vec());
    }

    debug!("➡️ 프록시 {} {}", method, url);
    let upstream = builder.send().await.map_err(|e| {
        error!("프록시 요청 실패 {} {}: {}", method, url, e);
        AppError::ExternalServiceError(format!("백엔드에 연결할 수 없습니다: {}", e))
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = HttpResponse::build(status);
    for (name, value) in upstream.headers().iter() {
        if !is_forwardable(name.as_str()) {
            continue;
        }
        response.append_header((name.as_str(), value.as_bytes()));
    }

    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("백엔드 응답 읽기 실패: {}", e)))?;

    Ok(response.body(bytes.to_vec()))
}

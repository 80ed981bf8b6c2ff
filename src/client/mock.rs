//! 테스트용 가짜 백엔드와 화면 전환 기록기

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::client::navigator::SessionNavigator;
use crate::client::request::{OutgoingRequest, RawResponse, RequestBody};
use crate::client::transport::HttpTransport;
use crate::errors::AppResult;

/// 세션 자격 증명 하나만 유효하다고 보는 가짜 API 서버
///
/// * `.../auth/refresh` - 기대한 리프레시 토큰이면 다음 토큰 쌍으로 교체
/// * `.../always-401` - 항상 401
/// * `.../missing` - 항상 404
/// * [`respond_with`](FakeBackend::respond_with)로 등록한 경로 - 유효한 Bearer 토큰이면 등록한 응답
/// * 그 외 - 유효한 Bearer 토큰이면 `{"data": {"path", "method", "body"}}`, 아니면 401
pub struct FakeBackend {
    valid_access: Mutex<String>,
    expected_refresh: Mutex<String>,
    next_tokens: Mutex<(String, String)>,
    refresh_delay: Mutex<Duration>,
    malformed_refresh: AtomicBool,
    refresh_calls: AtomicUsize,
    requests: Mutex<Vec<OutgoingRequest>>,
    canned: Mutex<HashMap<String, (StatusCode, String)>>,
}

impl FakeBackend {
    pub fn new(valid_access: &str, expected_refresh: &str) -> Self {
        Self {
            valid_access: Mutex::new(valid_access.to_string()),
            expected_refresh: Mutex::new(expected_refresh.to_string()),
            next_tokens: Mutex::new(("rotated-access".to_string(), "rotated-refresh".to_string())),
            refresh_delay: Mutex::new(Duration::ZERO),
            malformed_refresh: AtomicBool::new(false),
            refresh_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            canned: Mutex::new(HashMap::new()),
        }
    }

    /// 다음 갱신 때 발급할 토큰 쌍
    pub fn set_next_tokens(&self, access: &str, refresh: &str) {
        *self.next_tokens.lock().unwrap() = (access.to_string(), refresh.to_string());
    }

    pub fn set_refresh_delay(&self, delay: Duration) {
        *self.refresh_delay.lock().unwrap() = delay;
    }

    pub fn set_malformed_refresh(&self, malformed: bool) {
        self.malformed_refresh.store(malformed, Ordering::SeqCst);
    }

    /// 경로가 `path_suffix`로 끝나는 인증된 요청에 고정 응답
    pub fn respond_with(&self, path_suffix: &str, status: StatusCode, body: Value) {
        self.canned
            .lock()
            .unwrap()
            .insert(path_suffix.to_string(), (status, body.to_string()));
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    /// 수신한 요청 기록 (수신 순서)
    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn refresh(&self, request: &OutgoingRequest) -> RawResponse {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.refresh_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.malformed_refresh.load(Ordering::SeqCst) {
            return RawResponse::new(StatusCode::OK, r#"{"success":true,"data":{}}"#);
        }

        let presented = match &request.body {
            RequestBody::Json(body) => body["refreshToken"].as_str().unwrap_or_default().to_string(),
            _ => String::new(),
        };
        if presented != *self.expected_refresh.lock().unwrap() {
            return RawResponse::new(
                StatusCode::UNAUTHORIZED,
                r#"{"success":false,"message":"invalid refresh token"}"#,
            );
        }

        let (access, refresh) = self.next_tokens.lock().unwrap().clone();
        *self.valid_access.lock().unwrap() = access.clone();
        *self.expected_refresh.lock().unwrap() = refresh.clone();
        let body = json!({
            "success": true,
            "data": { "tokens": { "accessToken": access, "refreshToken": refresh } }
        });
        RawResponse::new(StatusCode::OK, body.to_string())
    }
}

#[async_trait]
impl HttpTransport for FakeBackend {
    async fn execute(&self, request: OutgoingRequest) -> AppResult<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let path = reqwest::Url::parse(&request.url)
            .map(|url| url.path().to_string())
            .unwrap_or_default();

        if path.ends_with("/auth/refresh") {
            return Ok(self.refresh(&request).await);
        }
        if path.ends_with("/missing") {
            return Ok(RawResponse::new(StatusCode::NOT_FOUND, r#"{"message":"not found"}"#));
        }

        let expected = format!("Bearer {}", self.valid_access.lock().unwrap());
        if path.ends_with("/always-401") || request.header_str("authorization") != Some(expected.as_str()) {
            return Ok(RawResponse::new(StatusCode::UNAUTHORIZED, r#"{"message":"unauthorized"}"#));
        }

        let canned = self
            .canned
            .lock()
            .unwrap()
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone());
        if let Some((status, body)) = canned {
            return Ok(RawResponse::new(status, body));
        }

        let body = match &request.body {
            RequestBody::Json(value) => value.clone(),
            RequestBody::Multipart(parts) => json!(parts.iter().map(|p| p.name.clone()).collect::<Vec<_>>()),
            RequestBody::Empty => Value::Null,
        };
        let query: serde_json::Map<String, Value> = request
            .query
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let response = json!({
            "success": true,
            "data": { "path": path, "method": request.method.as_str(), "body": body, "query": query }
        });
        Ok(RawResponse::new(StatusCode::OK, response.to_string()))
    }
}

/// 알림과 이동을 기록하는 화면 전환기
pub struct RecordingNavigator {
    current: Mutex<String>,
    notices: Mutex<Vec<String>>,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(current: &str) -> Self {
        Self {
            current: Mutex::new(current.to_string()),
            notices: Mutex::new(Vec::new()),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn set_current_path(&self, path: &str) {
        *self.current.lock().unwrap() = path.to_string();
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl SessionNavigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn notify_session_expired(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn redirect(&self, location: &str) {
        self.redirects.lock().unwrap().push(location.to_string());
        self.set_current_path(location);
    }
}

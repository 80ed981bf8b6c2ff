//! 인증 API 클라이언트
//!
//! 애플리케이션 전체에 하나의 HTTP 호출 창구를 제공하고, 자격 증명 부착과
//! 만료 복구를 투명하게 처리합니다.
//!
//! ## 요청 흐름
//!
//! ```text
//! request ──► dispatch ──► 401? ──아니오──► 2xx: Ok / 그 외: HttpStatus 에러 그대로 전달
//!                           │
//!                           예
//!                           ▼
//!                  이미 재시도됨? ──예──► 자격 증명 삭제 + 로그인 이동 (SessionExpired)
//!                           │
//!                          아니오
//!                           ▼
//!                  RefreshCoordinator::acquire
//!                    ├─ Initiator: POST /auth/refresh
//!                    │     ├─ 성공: 저장 → 대기열 해제 → 원래 요청 재전송
//!                    │     └─ 실패: 저장소 비움 → 대기열 거부 → 만료 알림 + 로그인 이동
//!                    └─ Waiter: 결과 대기 (시간 제한) → 새 토큰으로 재전송 / 거부
//! ```
//!
//! 갱신은 원래 요청마다 최대 한 번만 시도됩니다.

use std::sync::Arc;

use log::{debug, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::oneshot;

use crate::client::navigator::{session_expired_message, LoggingNavigator, SessionNavigator};
use crate::client::refresh::{RefreshCoordinator, RefreshLease, RefreshOutcome, RefreshTicket};
use crate::client::request::{ApiRequest, OutgoingRequest, RawResponse, RequestBody};
use crate::client::transport::{HttpTransport, ReqwestTransport};
use crate::config::{ClientConfig, StorageKeys};
use crate::domain::dto::tokens::{ApiResponse, RefreshData, RefreshRequest};
use crate::domain::models::locale::Locale;
use crate::domain::models::token::token::TokenPair;
use crate::errors::{AppError, AppResult};
use crate::services::auth::session_decoder::SessionDecoder;
use crate::storage::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

/// 토큰 갱신 엔드포인트
pub const REFRESH_PATH: &str = "/auth/refresh";

/// 인증 API 클라이언트
///
/// 갱신 상태(진행 플래그와 대기열)는 인스턴스가 소유하므로 여러 클라이언트가
/// 숨겨진 상태를 공유하지 않습니다.
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn SessionNavigator>,
    decoder: SessionDecoder,
    refresh: RefreshCoordinator,
}

impl ApiClient {
    /// 구성 요소를 직접 지정하여 클라이언트 생성
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn SessionNavigator>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
            navigator,
            decoder: SessionDecoder::unverified(),
            refresh: RefreshCoordinator::new(),
        }
    }

    /// 환경 변수 설정으로 클라이언트 생성
    ///
    /// `CREDENTIAL_STORE_PATH`가 설정되어 있으면 파일 저장소를, 아니면 메모리 저장소를 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트 초기화 실패
    /// * `AppError::StorageError` - 저장소 파일 읽기 실패
    pub fn from_env() -> AppResult<Self> {
        let config = ClientConfig::from_env();
        let transport = Arc::new(ReqwestTransport::new(config.request_timeout)?);
        let store: Arc<dyn CredentialStore> = match StorageKeys::store_path() {
            Some(path) => Arc::new(FileCredentialStore::open(path)?),
            None => Arc::new(MemoryCredentialStore::new()),
        };
        Ok(Self::new(config, transport, store, Arc::new(LoggingNavigator::default())))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn refresh_coordinator(&self) -> &RefreshCoordinator {
        &self.refresh
    }

    // ---------------------------------------------------------------------
    // 자격 증명 / 언어
    // ---------------------------------------------------------------------

    /// 저장된 세션 자격 증명
    pub fn access_token(&self) -> Option<String> {
        self.store.get(StorageKeys::ACCESS_TOKEN).filter(|t| !t.is_empty())
    }

    /// 저장된 리프레시 자격 증명
    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(StorageKeys::REFRESH_TOKEN).filter(|t| !t.is_empty())
    }

    /// 저장된 언어 설정 (기본값 `id`)
    pub fn locale(&self) -> Locale {
        Locale::from_stored(self.store.get(StorageKeys::LOCALE).as_deref())
    }

    /// 언어 설정 저장
    pub fn set_locale(&self, locale: Locale) -> AppResult<()> {
        self.store.set(StorageKeys::LOCALE, locale.as_str())
    }

    /// 토큰 쌍 저장
    pub fn save_tokens(&self, pair: &TokenPair) -> AppResult<()> {
        self.store.set(StorageKeys::ACCESS_TOKEN, &pair.access_token)?;
        self.store.set(StorageKeys::REFRESH_TOKEN, &pair.refresh_token)
    }

    /// 로그인 응답으로 받은 토큰 쌍으로 세션 시작
    pub fn login_with_tokens(&self, pair: &TokenPair) -> AppResult<()> {
        self.save_tokens(pair)?;
        info!("세션 시작");
        Ok(())
    }

    /// 두 자격 증명을 모두 삭제합니다. 언어 설정은 유지됩니다.
    pub fn clear_session(&self) {
        for key in [StorageKeys::ACCESS_TOKEN, StorageKeys::REFRESH_TOKEN] {
            if let Err(e) = self.store.remove(key) {
                error!("자격 증명 삭제 실패 ({}): {}", key, e);
            }
        }
    }

    /// 유효한(디코딩 가능하고 만료되지 않은) 세션 자격 증명이 있는지 확인
    pub fn is_authenticated(&self) -> bool {
        self.access_token()
            .is_some_and(|token| self.decoder.is_active(&token))
    }

    /// 로그아웃: 자격 증명 삭제 후 로그인 화면으로 이동
    pub fn logout(&self) {
        self.clear_session();
        info!("로그아웃");
        self.navigator.redirect(&self.config.login_path);
    }

    // ---------------------------------------------------------------------
    // 요청
    // ---------------------------------------------------------------------

    /// 요청을 전송하고 2xx 응답을 반환합니다.
    ///
    /// 401 응답은 토큰 갱신 후 한 번 재전송되며, 그 외의 에러 상태는
    /// `AppError::HttpStatus`로 그대로 전달됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::HttpStatus` - 인증 외 에러 응답
    /// * `AppError::SessionExpired` - 갱신 실패 또는 재전송 후에도 401
    /// * `AppError::RefreshTimeout` - 진행 중인 갱신 대기 시간 초과
    /// * `AppError::TransportError` - 네트워크 오류
    pub async fn request(&self, mut request: ApiRequest) -> AppResult<RawResponse> {
        let response = self.dispatch(&request, None).await?;
        if response.status != StatusCode::UNAUTHORIZED {
            return response.error_for_status();
        }

        if request.retried {
            return Err(self.terminate_session("재전송된 요청이 다시 401을 받았습니다"));
        }
        request.retried = true;

        let token = match self.refresh.acquire() {
            RefreshTicket::Initiator(lease) => self.run_refresh(lease).await?,
            RefreshTicket::Waiter(rx) => {
                debug!("토큰 갱신 대기열에 추가: {} {}", request.method, request.path);
                self.wait_for_refresh(rx).await?
            }
        };

        let replay = self.dispatch(&request, Some(&token)).await?;
        if replay.status == StatusCode::UNAUTHORIZED {
            return Err(self.terminate_session("재전송된 요청이 다시 401을 받았습니다"));
        }
        replay.error_for_status()
    }

    /// 요청을 전송하고 JSON 응답 본문 전체를 해석합니다.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        self.request(request).await?.json()
    }

    /// 요청을 전송하고 `{ data }` 래퍼를 벗긴 값을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::SerializationError` - `data` 필드가 없거나 형식 불일치
    pub async fn fetch_data<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let path = request.path.clone();
        let envelope: ApiResponse<T> = self.send(request).await?;
        envelope.data.ok_or_else(|| {
            AppError::SerializationError(format!("{} 응답에 data 필드가 없습니다", path))
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).json(body)?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::put(path).json(body)?).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::patch(path).json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send(ApiRequest::delete(path)).await
    }

    // ---------------------------------------------------------------------
    // 내부 구현
    // ---------------------------------------------------------------------

    /// 기본 헤더를 붙여 요청을 한 번 전송합니다.
    ///
    /// 헤더 우선순위: 기본 헤더 < 요청별 헤더 < 갱신된 토큰
    async fn dispatch(&self, request: &ApiRequest, bearer: Option<&str>) -> AppResult<RawResponse> {
        let mut headers = HeaderMap::new();
        if !request.body.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(self.locale().as_str()));
        if let Some(token) = self.access_token() {
            headers.insert(AUTHORIZATION, bearer_header(&token)?);
        }

        for (name, value) in request.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        if let Some(token) = bearer {
            headers.insert(AUTHORIZATION, bearer_header(token)?);
        }

        self.transport
            .execute(OutgoingRequest {
                method: request.method.clone(),
                url: self.config.endpoint(&request.path),
                query: request.query.clone(),
                headers,
                body: request.body.clone(),
            })
            .await
    }

    /// 갱신을 수행하고 결과로 대기열을 정산합니다.
    async fn run_refresh(&self, lease: RefreshLease<'_>) -> AppResult<String> {
        info!("🔄 액세스 토큰 갱신 시작");

        let result = match self.refresh_token() {
            Some(refresh_token) => self.exchange_refresh_token(&refresh_token).await,
            None => Err(AppError::AuthenticationError("리프레시 토큰이 없습니다".to_string())),
        };

        match result {
            Ok(pair) => {
                if let Err(e) = self.save_tokens(&pair) {
                    error!("갱신된 토큰 저장 실패: {}", e);
                }
                let released = lease.resolve(pair.access_token.clone());
                info!("✅ 액세스 토큰 갱신 완료 (대기 요청 {}건 재전송)", released);
                Ok(pair.access_token)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!("❌ 토큰 갱신 실패: {}", reason);
                self.clear_session();
                let rejected = lease.reject(reason.clone());
                debug!("대기 요청 {}건 거부", rejected);
                self.expire_session(true);
                Err(AppError::SessionExpired(reason))
            }
        }
    }

    /// `POST /auth/refresh` 호출
    ///
    /// 인터셉터를 거치지 않고 전송 계층을 직접 사용합니다.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let body = serde_json::to_value(RefreshRequest {
            refresh_token: refresh_token.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(self.locale().as_str()));

        let response = self
            .transport
            .execute(OutgoingRequest {
                method: Method::POST,
                url: self.config.endpoint(REFRESH_PATH),
                query: Vec::new(),
                headers,
                body: RequestBody::Json(body),
            })
            .await?
            .error_for_status()?;

        let envelope: ApiResponse<RefreshData> = response.json()?;
        let pair = envelope
            .data
            .map(|data| data.tokens)
            .ok_or_else(|| AppError::AuthenticationError("갱신 응답에 토큰이 없습니다".to_string()))?;

        if pair.access_token.is_empty() || pair.refresh_token.is_empty() {
            return Err(AppError::AuthenticationError("갱신 응답의 토큰이 비어 있습니다".to_string()));
        }
        Ok(pair)
    }

    /// 진행 중인 갱신의 결과를 기다립니다.
    async fn wait_for_refresh(&self, rx: oneshot::Receiver<RefreshOutcome>) -> AppResult<String> {
        let timeout = self.config.refresh_wait_timeout;
        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(Ok(token))) => Ok(token),
            Ok(Ok(Err(reason))) => Err(AppError::SessionExpired(reason)),
            Ok(Err(_)) => Err(AppError::SessionExpired("토큰 갱신이 중단되었습니다".to_string())),
            Err(_) => {
                warn!("토큰 갱신 대기 시간 초과 ({:?})", timeout);
                Err(AppError::RefreshTimeout(timeout.as_secs()))
            }
        }
    }

    /// 재전송 후에도 401인 경우: 다시 갱신하지 않고 세션 종료
    fn terminate_session(&self, reason: &str) -> AppError {
        warn!("세션 종료: {}", reason);
        self.clear_session();
        self.expire_session(false);
        AppError::SessionExpired(reason.to_string())
    }

    /// 로그인 화면이 아니면 (선택적으로 알림 후) 로그인 화면으로 이동
    fn expire_session(&self, notify: bool) {
        let current = self.navigator.current_path();
        if current.starts_with(&self.config.login_path) {
            debug!("이미 로그인 화면입니다: {}", current);
            return;
        }
        if notify {
            self.navigator
                .notify_session_expired(session_expired_message(self.locale()));
        }
        self.navigator.redirect(&self.config.login_path);
    }
}

fn bearer_header(token: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| AppError::AuthenticationError(format!("잘못된 토큰 형식: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{FakeBackend, RecordingNavigator};
    use crate::services::auth::session_decoder::test_tokens::session_token;
    use futures_util::future::join_all;
    use serde_json::Value;
    use std::time::Duration;

    struct Harness {
        client: ApiClient,
        backend: Arc<FakeBackend>,
        store: Arc<MemoryCredentialStore>,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness(access: Option<&str>, refresh: Option<&str>) -> Harness {
        let backend = Arc::new(FakeBackend::new("valid-access", "valid-refresh"));
        let mut entries = Vec::new();
        if let Some(token) = access {
            entries.push((StorageKeys::ACCESS_TOKEN, token));
        }
        if let Some(token) = refresh {
            entries.push((StorageKeys::REFRESH_TOKEN, token));
        }
        let store = Arc::new(MemoryCredentialStore::with_entries(entries));
        let navigator = Arc::new(RecordingNavigator::new("/orders"));
        let client = ApiClient::new(
            ClientConfig::new("https://api.posko.test/api")
                .with_refresh_wait_timeout(Duration::from_secs(5)),
            backend.clone(),
            store.clone(),
            navigator.clone(),
        );
        Harness { client, backend, store, navigator }
    }

    #[tokio::test]
    async fn test_valid_credential_never_refreshes() {
        let h = harness(Some("valid-access"), Some("valid-refresh"));

        for _ in 0..3 {
            let value: Value = h.client.get("/orders").await.unwrap();
            assert_eq!(value["data"]["path"], "/api/orders");
        }

        assert_eq!(h.backend.refresh_calls(), 0);
        let sent = h.backend.requests();
        assert!(sent.iter().all(|r| r.header_str("authorization") == Some("Bearer valid-access")));
        assert!(sent.iter().all(|r| r.header_str("content-type") == Some("application/json")));
        assert_eq!(sent[0].url, "https://api.posko.test/api/orders");
    }

    #[tokio::test]
    async fn test_accept_language_follows_persisted_locale() {
        let h = harness(Some("valid-access"), None);

        let _: Value = h.client.get("/banners").await.unwrap();
        h.client.set_locale(Locale::En).unwrap();
        let _: Value = h.client.get("/banners").await.unwrap();

        let languages: Vec<_> = h
            .backend
            .requests()
            .iter()
            .map(|r| r.header_str("accept-language").unwrap_or_default().to_string())
            .collect();
        assert_eq!(languages, vec!["id", "en"]);
        assert_eq!(h.store.get(StorageKeys::LOCALE).as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_concurrent_401s_share_one_refresh() {
        let h = harness(Some("expired-access"), Some("valid-refresh"));
        h.backend.set_refresh_delay(Duration::from_millis(50));
        h.backend.set_next_tokens("fresh-access", "fresh-refresh");

        let paths: Vec<String> = (0..5).map(|i| format!("/orders/{}", i)).collect();
        let results = join_all(paths.iter().map(|p| h.client.get::<Value>(p))).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(h.backend.refresh_calls(), 1);
        assert!(!h.client.refresh_coordinator().is_in_flight());

        let replays: Vec<_> = h
            .backend
            .requests()
            .into_iter()
            .filter(|r| !r.url.ends_with(REFRESH_PATH))
            .filter(|r| r.header_str("authorization") == Some("Bearer fresh-access"))
            .collect();
        assert_eq!(replays.len(), 5);

        assert_eq!(h.client.access_token().as_deref(), Some("fresh-access"));
        assert_eq!(h.client.refresh_token().as_deref(), Some("fresh-refresh"));
        assert!(h.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_refreshed_credentials_used_for_later_calls() {
        let h = harness(Some("expired-access"), Some("valid-refresh"));
        h.backend.set_next_tokens("fresh-access", "fresh-refresh");

        let _: Value = h.client.get("/orders").await.unwrap();
        let _: Value = h.client.get("/profile").await.unwrap();

        assert_eq!(h.backend.refresh_calls(), 1);
        let last = h.backend.requests().pop().unwrap();
        assert_eq!(last.header_str("authorization"), Some("Bearer fresh-access"));
    }

    #[tokio::test]
    async fn test_retried_request_never_refreshes_twice() {
        let h = harness(Some("expired-access"), Some("valid-refresh"));
        h.backend.set_next_tokens("fresh-access", "fresh-refresh");

        let result = h.client.get::<Value>("/always-401").await;

        assert!(matches!(result, Err(AppError::SessionExpired(_))));
        assert_eq!(h.backend.refresh_calls(), 1);
        assert!(h.client.access_token().is_none());
        assert!(h.client.refresh_token().is_none());
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_refresh_token_clears_session_and_redirects() {
        let h = harness(Some("expired-access"), None);
        h.client.set_locale(Locale::En).unwrap();

        let result = h.client.get::<Value>("/orders").await;

        match result {
            Err(AppError::SessionExpired(reason)) => assert!(reason.contains("리프레시 토큰이 없습니다")),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(h.backend.refresh_calls(), 0);
        assert!(h.client.access_token().is_none());
        assert_eq!(h.client.locale(), Locale::En);
        assert_eq!(h.navigator.notices(), vec![session_expired_message(Locale::En).to_string()]);
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_refresh_rejects_every_queued_request() {
        let h = harness(Some("expired-access"), Some("revoked-refresh"));
        h.backend.set_refresh_delay(Duration::from_millis(50));

        let paths: Vec<String> = (0..4).map(|i| format!("/chat/{}", i)).collect();
        let results = join_all(paths.iter().map(|p| h.client.get::<Value>(p))).await;

        let reasons: Vec<String> = results
            .into_iter()
            .map(|r| match r {
                Err(AppError::SessionExpired(reason)) => reason,
                other => panic!("unexpected: {:?}", other),
            })
            .collect();
        assert!(reasons.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(h.backend.refresh_calls(), 1);
        assert!(h.store.get(StorageKeys::ACCESS_TOKEN).is_none());
        assert!(h.store.get(StorageKeys::REFRESH_TOKEN).is_none());
        assert_eq!(h.navigator.notices().len(), 1);
        assert_eq!(h.navigator.redirects().len(), 1);
    }

    #[tokio::test]
    async fn test_no_redirect_when_already_on_login_page() {
        let h = harness(Some("expired-access"), None);
        h.navigator.set_current_path("/login");

        let result = h.client.get::<Value>("/orders").await;

        assert!(result.is_err());
        assert!(h.navigator.notices().is_empty());
        assert!(h.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_non_auth_errors_propagate_unchanged() {
        let h = harness(Some("valid-access"), Some("valid-refresh"));

        match h.client.get::<Value>("/missing").await {
            Err(AppError::HttpStatus { status, body }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(body.contains("not found"));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(h.backend.refresh_calls(), 0);
        assert!(h.client.access_token().is_some());
    }

    #[tokio::test]
    async fn test_malformed_refresh_response_is_failure() {
        let h = harness(Some("expired-access"), Some("valid-refresh"));
        h.backend.set_malformed_refresh(true);

        let result = h.client.get::<Value>("/orders").await;

        assert!(matches!(result, Err(AppError::SessionExpired(_))));
        assert!(h.client.refresh_token().is_none());
    }

    #[tokio::test]
    async fn test_queued_request_times_out_when_refresh_stalls() {
        let backend = Arc::new(FakeBackend::new("valid-access", "valid-refresh"));
        let store = Arc::new(MemoryCredentialStore::with_entries([(StorageKeys::ACCESS_TOKEN, "expired")]));
        let client = ApiClient::new(
            ClientConfig::new("https://api.posko.test/api")
                .with_refresh_wait_timeout(Duration::from_millis(30)),
            backend.clone(),
            store,
            Arc::new(RecordingNavigator::new("/orders")),
        );

        let RefreshTicket::Initiator(stalled) = client.refresh_coordinator().acquire() else {
            panic!("slot should be free");
        };
        let result = client.get::<Value>("/orders").await;

        assert!(matches!(result, Err(AppError::RefreshTimeout(_))));
        assert_eq!(backend.refresh_calls(), 0);
        drop(stalled);
        assert!(!client.refresh_coordinator().is_in_flight());
    }

    #[tokio::test]
    async fn test_request_specific_headers_override_defaults() {
        let h = harness(Some("valid-access"), None);
        let request = ApiRequest::get("/settings")
            .header(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));

        let _: Value = h.client.send(request).await.unwrap();

        let sent = h.backend.requests().pop().unwrap();
        assert_eq!(sent.header_str("accept-language"), Some("en"));
        assert_eq!(sent.header_str("authorization"), Some("Bearer valid-access"));
    }

    #[tokio::test]
    async fn test_session_helpers() {
        let h = harness(None, None);
        assert!(!h.client.is_authenticated());

        let now = chrono::Utc::now().timestamp();
        h.client
            .login_with_tokens(&TokenPair::new(session_token(now + 3600, "s"), "r"))
            .unwrap();
        assert!(h.client.is_authenticated());

        h.client
            .login_with_tokens(&TokenPair::new(session_token(now - 10, "s"), "r"))
            .unwrap();
        assert!(!h.client.is_authenticated());

        h.client.logout();
        assert!(h.client.access_token().is_none());
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }
}

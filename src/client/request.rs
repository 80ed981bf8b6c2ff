//! API 요청/응답 값 타입
//!
//! 요청은 토큰 갱신 후 재전송될 수 있어야 하므로 본문을 포함한 모든 필드가 복제 가능합니다.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// multipart 폼 필드
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

impl FormPart {
    /// 파일 필드 생성
    pub fn file(name: &str, file_name: &str, mime_type: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            mime_type: Some(mime_type.to_string()),
            data,
        }
    }
}

/// 요청 본문
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// 애플리케이션이 API 클라이언트에 전달하는 요청
///
/// `path`는 기본 URL에 붙는 상대 경로입니다. `retried`는 토큰 갱신 후 재전송된
/// 요청임을 나타내며, 재전송된 요청은 다시 갱신을 시도하지 않습니다.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub(crate) retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            retried: false,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: &str) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// JSON 본문 설정
    ///
    /// # Errors
    ///
    /// * `AppError::SerializationError` - 본문 직렬화 실패
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> AppResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// multipart 본문 설정
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// 쿼리 파라미터 추가
    pub fn query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// 요청별 헤더 설정 (기본 헤더를 덮어씀)
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// 토큰 갱신 후 재전송된 요청인지 여부
    pub fn is_retried(&self) -> bool {
        self.retried
    }
}

/// 전송 계층에 전달되는 완성된 요청
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl OutgoingRequest {
    /// 헤더 값을 문자열로 조회
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// 전송 계층이 반환하는 원시 응답
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// 본문을 JSON으로 해석
    ///
    /// # Errors
    ///
    /// * `AppError::SerializationError` - JSON 형식 불일치
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        let body = if self.body.trim().is_empty() { "null" } else { self.body.as_str() };
        serde_json::from_str(body).map_err(|e| {
            AppError::SerializationError(format!("응답 파싱 실패 (HTTP {}): {}", self.status, e))
        })
    }

    /// 2xx 응답이면 그대로, 아니면 `AppError::HttpStatus`로 변환
    pub fn error_for_status(self) -> AppResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(AppError::HttpStatus {
                status: self.status,
                body: self.body,
            })
        }
    }
}

//! HTTP 전송 계층
//!
//! API 클라이언트의 인터셉터 로직은 [`HttpTransport`] trait 뒤의 전송 계층과 분리되어 있어,
//! 실제 네트워크는 `reqwest`로, 테스트는 메모리 구현으로 교체할 수 있습니다.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::client::request::{OutgoingRequest, RawResponse, RequestBody};
use crate::errors::{AppError, AppResult};

/// HTTP 전송 인터페이스
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 요청을 전송하고 상태 코드에 관계없이 응답을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TransportError` - 연결 실패, 타임아웃 등 응답을 받지 못한 경우
    async fn execute(&self, request: OutgoingRequest) -> AppResult<RawResponse>;
}

/// `reqwest` 기반 전송 계층
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 요청 타임아웃이 설정된 전송 계층 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트 초기화 실패
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;
        Ok(Self { client })
    }

    fn build_form(parts: Vec<crate::client::request::FormPart>) -> AppResult<Form> {
        let mut form = Form::new();
        for part in parts {
            let mut field = Part::bytes(part.data);
            if let Some(file_name) = part.file_name {
                field = field.file_name(file_name);
            }
            if let Some(mime) = part.mime_type {
                field = field
                    .mime_str(&mime)
                    .map_err(|e| AppError::ValidationError(format!("잘못된 MIME 타입 {}: {}", mime, e)))?;
            }
            form = form.part(part.name, field);
        }
        Ok(form)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutgoingRequest) -> AppResult<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(parts) => builder.multipart(Self::build_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::TransportError(format!("{} {} 요청 실패: {}", request.method, request.url, e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::TransportError(format!("응답 본문 읽기 실패: {}", e)))?;

        Ok(RawResponse { status, headers, body })
    }
}

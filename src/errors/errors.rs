//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! API 클라이언트, 라우트 가드, 프록시 핸들러가 공유하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, 엣지 서버에서는
//! `actix_web::ResponseError`를 통해 HTTP 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | 처리 방식 |
//! |------|------|-----------|
//! | 일시적 인증 실패 | (외부 노출 없음) | 토큰 갱신 후 재시도 |
//! | 최종 인증 실패 | `SessionExpired` | 강제 로그아웃 + 로그인 리디렉션 |
//! | 일반 HTTP 에러 | `HttpStatus` | 상태 코드와 본문 그대로 호출자에게 전달 |
//! | 잘못된 세션 쿠키 | `AuthenticationError` | 가드에서는 비인증으로 취급 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! match client.get::<ApiResponse<Vec<Banner>>>("/banners").await {
//!     Err(AppError::HttpStatus { status, .. }) if status == 404 => { /* 페이지에서 처리 */ }
//!     Err(AppError::SessionExpired(_)) => { /* 이미 로그인 페이지로 이동됨 */ }
//!     other => { /* ... */ }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 측 HTTP 호출과 엣지 서버에서 발생할 수 있는 모든 에러를 포괄합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 백엔드가 반환한 인증 외 HTTP 에러 (상태 코드 그대로 전달)
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    /// 네트워크/전송 계층 에러 (연결 실패, 타임아웃 등)
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 복구 불가능한 인증 실패 (리프레시 실패, 재시도 후 401)
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// 진행 중인 토큰 갱신을 기다리다 시간 초과
    #[error("Timed out after {0} seconds waiting for token refresh")]
    RefreshTimeout(u64),

    /// 세션 자격 증명 해석 실패 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청/응답 직렬화 에러
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 자격 증명 저장소 에러
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 설정값 에러
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 업스트림(백엔드) 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 에러 (500 Internal Server Error)
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 백엔드가 반환한 HTTP 상태 코드 (있는 경우)
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 호출자가 로그인 화면으로 보내져야 하는 에러인지 확인
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::SessionExpired(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::TransportError(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode as ActixStatus;

        match self {
            AppError::HttpStatus { status, .. } => ActixStatus::from_u16(status.as_u16())
                .unwrap_or(ActixStatus::INTERNAL_SERVER_ERROR),
            AppError::ValidationError(_) => ActixStatus::BAD_REQUEST,
            AppError::AuthenticationError(_) | AppError::SessionExpired(_) => {
                ActixStatus::UNAUTHORIZED
            }
            AppError::TransportError(_) | AppError::ExternalServiceError(_) => {
                ActixStatus::BAD_GATEWAY
            }
            AppError::RefreshTimeout(_) => ActixStatus::GATEWAY_TIMEOUT,
            _ => ActixStatus::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "success": false,
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

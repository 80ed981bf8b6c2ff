use serde::{Deserialize, Serialize};

use crate::domain::models::token::token::TokenPair;

/// 백엔드 API 응답 래퍼
///
/// 백엔드는 `{ success, data, message }` 형태로 응답하며,
/// `success`와 `message`는 생략될 수 있습니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 토큰 갱신 응답의 `data` 부분
#[derive(Debug, Deserialize)]
pub struct RefreshData {
    pub tokens: TokenPair,
}

use serde::Serialize;

/// 토큰 갱신 요청 DTO (`POST /auth/refresh`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

use crate::client::{ApiClient, ApiRequest};
use crate::domain::dto::marketplace::PlatformSettings;
use crate::errors::AppResult;

/// 플랫폼 공개 설정 조회
pub struct SettingService<'a> {
    client: &'a ApiClient,
}

impl<'a> SettingService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /settings`
    pub async fn get(&self) -> AppResult<PlatformSettings> {
        self.client.fetch_data(ApiRequest::get("/settings")).await
    }
}

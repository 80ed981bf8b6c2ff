use crate::client::{ApiClient, ApiRequest};
use crate::domain::dto::marketplace::Region;
use crate::errors::AppResult;

/// 행정 구역 조회 (주소 입력용)
pub struct RegionService<'a> {
    client: &'a ApiClient,
}

impl<'a> RegionService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /regions/provinces`
    pub async fn provinces(&self) -> AppResult<Vec<Region>> {
        self.client.fetch_data(ApiRequest::get("/regions/provinces")).await
    }

    /// `GET /regions/children/{parent_id}`
    pub async fn children(&self, parent_id: &str) -> AppResult<Vec<Region>> {
        let path = format!("/regions/children/{}", urlencoding::encode(parent_id));
        self.client.fetch_data(ApiRequest::get(&path)).await
    }
}

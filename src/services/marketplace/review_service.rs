use validator::Validate;

use crate::client::{ApiClient, ApiRequest};
use crate::domain::dto::marketplace::{CreateReviewRequest, Review, ReviewQuery};
use crate::errors::AppResult;

/// 서비스 리뷰 조회 및 작성
pub struct ReviewService<'a> {
    client: &'a ApiClient,
}

impl<'a> ReviewService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /reviews`
    pub async fn list(&self, query: &ReviewQuery) -> AppResult<Vec<Review>> {
        self.client
            .fetch_data(ApiRequest::get("/reviews").query(query.to_pairs()))
            .await
    }

    /// `POST /reviews`
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 평점이 1~5 범위를 벗어나거나 주문 ID가 비어 있음
    pub async fn create(&self, request: &CreateReviewRequest) -> AppResult<Review> {
        request.validate()?;
        self.client
            .fetch_data(ApiRequest::post("/reviews").json(request)?)
            .await
    }
}

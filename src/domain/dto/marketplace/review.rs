use serde::{Deserialize, Serialize};
use validator::Validate;

/// 서비스 리뷰
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub order_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// 리뷰 목록 조회 조건 (`GET /reviews`)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ReviewQuery {
    /// 쿼리 문자열 쌍으로 변환
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref v) = self.provider_id {
            pairs.push(("providerId".to_string(), v.clone()));
        }
        if let Some(ref v) = self.service_id {
            pairs.push(("serviceId".to_string(), v.clone()));
        }
        if let Some(v) = self.page {
            pairs.push(("page".to_string(), v.to_string()));
        }
        if let Some(v) = self.limit {
            pairs.push(("limit".to_string(), v.to_string()));
        }
        pairs
    }
}

/// 리뷰 작성 요청 (`POST /reviews`)
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, message = "주문 ID가 필요합니다"))]
    pub order_id: String,
    #[validate(range(min = 1, max = 5, message = "평점은 1~5 사이여야 합니다"))]
    pub rating: u8,
    #[validate(length(max = 1000, message = "리뷰는 1000자 이하여야 합니다"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

use crate::client::{ApiClient, ApiRequest};
use crate::domain::dto::marketplace::Banner;
use crate::errors::AppResult;

/// 홈 화면 배너 조회
pub struct BannerService<'a> {
    client: &'a ApiClient,
}

impl<'a> BannerService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /banners`
    pub async fn list(&self) -> AppResult<Vec<Banner>> {
        self.client.fetch_data(ApiRequest::get("/banners")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::marketplace::test_support::signed_in_client;
    use reqwest::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_parses_banners() {
        let (client, backend) = signed_in_client();
        backend.respond_with(
            "/banners",
            StatusCode::OK,
            json!({
                "success": true,
                "data": [
                    {
                        "id": "bn-1",
                        "title": "Diskon AC",
                        "imageUrl": "https://cdn.posko.id/bn-1.webp",
                        "linkUrl": "/services/ac",
                        "isActive": true,
                        "sortOrder": 1
                    },
                    { "id": "bn-2", "imageUrl": "https://cdn.posko.id/bn-2.webp" }
                ]
            }),
        );

        let banners = BannerService::new(&client).list().await.unwrap();

        assert_eq!(banners.len(), 2);
        assert_eq!(
            banners[0],
            Banner {
                id: "bn-1".to_string(),
                title: Some("Diskon AC".to_string()),
                image_url: "https://cdn.posko.id/bn-1.webp".to_string(),
                link_url: Some("/services/ac".to_string()),
                is_active: true,
                sort_order: 1,
            }
        );
        assert!(banners[1].title.is_none());
        assert!(!banners[1].is_active);

        let sent = backend.requests().pop().unwrap();
        assert_eq!(sent.method, reqwest::Method::GET);
        assert_eq!(sent.url, "https://api.posko.test/api/banners");
    }

    #[tokio::test]
    async fn test_list_rejects_unexpected_shape() {
        let (client, _backend) = signed_in_client();

        // 등록된 응답이 없으면 가짜 백엔드는 요청 정보를 돌려주므로 배열로 해석되지 않음
        let result = BannerService::new(&client).list().await;

        assert!(result.is_err());
    }
}

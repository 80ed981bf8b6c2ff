use validator::Validate;

use crate::client::{ApiClient, ApiRequest};
use crate::domain::dto::marketplace::{Voucher, VoucherCheckRequest, VoucherCheckResult};
use crate::errors::AppResult;

/// 할인 바우처 조회 및 적용 확인
pub struct VoucherService<'a> {
    client: &'a ApiClient,
}

impl<'a> VoucherService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /vouchers`
    pub async fn list(&self) -> AppResult<Vec<Voucher>> {
        self.client.fetch_data(ApiRequest::get("/vouchers")).await
    }

    /// `POST /vouchers/check`
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 코드 또는 음수 주문 금액 (요청 전송 전 검증)
    pub async fn check(&self, code: &str, order_amount: f64) -> AppResult<VoucherCheckResult> {
        let request = VoucherCheckRequest {
            code: code.trim().to_string(),
            order_amount,
        };
        request.validate()?;

        self.client
            .fetch_data(ApiRequest::post("/vouchers/check").json(&request)?)
            .await
    }
}

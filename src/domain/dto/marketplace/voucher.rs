use serde::{Deserialize, Serialize};
use validator::Validate;

/// 할인 바우처
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `percentage` 또는 `fixed`
    pub discount_type: String,
    pub discount_value: f64,
    #[serde(default)]
    pub min_order_amount: Option<f64>,
    #[serde(default)]
    pub max_discount: Option<f64>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// 바우처 적용 가능 여부 확인 요청 (`POST /vouchers/check`)
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoucherCheckRequest {
    #[validate(length(min = 1, message = "바우처 코드가 필요합니다"))]
    pub code: String,
    #[validate(range(min = 0.0, message = "주문 금액은 0 이상이어야 합니다"))]
    pub order_amount: f64,
}

/// 바우처 확인 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherCheckResult {
    pub valid: bool,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub voucher: Option<Voucher>,
    #[serde(default)]
    pub message: Option<String>,
}

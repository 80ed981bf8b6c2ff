use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 플랫폼 공개 설정
///
/// 알려진 필드 외의 값은 `extra`에 그대로 보존됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub support_phone: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub service_fee: Option<f64>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

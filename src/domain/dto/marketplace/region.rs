use serde::{Deserialize, Serialize};

/// 행정 구역 (주 → 시/군 → 구 → 동)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

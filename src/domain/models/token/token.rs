//! 세션 자격 증명 클레임과 토큰 쌍
//!
//! 백엔드가 발급한 JWT의 페이로드 구조와, 로그인/갱신 시 함께 전달되는
//! 액세스/리프레시 토큰 쌍을 정의합니다.
use serde::{Deserialize, Serialize};

/// 세션 자격 증명(JWT)의 클레임
///
/// 백엔드는 camelCase 필드를 사용하며, `exp`를 제외한 모든 클레임은 선택 사항입니다.
///
/// ## 클레임 구성
///
/// - `userId`: 사용자 ID
/// - `email`: 사용자 이메일
/// - `role`: 기본 역할 (`customer`, `provider`, `admin` 등)
/// - `activeRole`: 현재 전환된 역할 (고객/파트너 모드 전환)
/// - `roles`: 보유 역할 목록
/// - `exp`: 만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    pub exp: i64,
}

impl SessionClaims {
    /// 주어진 시각(초) 기준으로 만료되었는지 확인
    ///
    /// `exp`가 현재 시각보다 이전이면 만료로 판단합니다.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }

    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
            || self.active_role.as_deref() == Some(role)
            || self
                .roles
                .as_ref()
                .is_some_and(|roles| roles.iter().any(|r| r == role))
    }
}

/// 액세스 + 리프레시 토큰 쌍
///
/// `POST /auth/refresh` 응답의 `data.tokens` 와 동일한 형식입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// 액세스 토큰 (세션 자격 증명)
    pub access_token: String,
    /// 리프레시 토큰
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_with_optional_fields_missing() {
        let claims: SessionClaims = serde_json::from_str(r#"{"exp": 1700000000}"#).unwrap();

        assert_eq!(claims.exp, 1_700_000_000);
        assert!(claims.user_id.is_none());
        assert!(!claims.has_role("customer"));
    }

    #[test]
    fn test_claims_expiry_boundary() {
        let claims = SessionClaims {
            user_id: Some("u-1".to_string()),
            email: None,
            role: Some("customer".to_string()),
            active_role: Some("provider".to_string()),
            roles: Some(vec!["customer".to_string(), "provider".to_string()]),
            exp: 100,
        };

        assert!(!claims.is_expired_at(99));
        assert!(!claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
        assert!(claims.has_role("provider"));
        assert!(!claims.has_role("admin"));
    }

    #[test]
    fn test_token_pair_uses_camel_case() {
        let pair = TokenPair::new("a", "r");
        let json = serde_json::to_value(&pair).unwrap();

        assert_eq!(json["accessToken"], "a");
        assert_eq!(json["refreshToken"], "r");
    }
}

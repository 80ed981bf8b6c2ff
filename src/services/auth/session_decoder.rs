//! 세션 자격 증명(JWT) 해석 서비스
//!
//! 백엔드가 발급한 세션 토큰을 디코딩하고 만료 여부를 확인합니다.
//! 프론트엔드 엣지는 보통 백엔드의 서명 키를 갖고 있지 않으므로 기본적으로
//! 서명 검증 없이 페이로드만 해석하며, 비밀키가 설정된 경우에만 HS256 서명을 검증합니다.

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::models::token::token::SessionClaims;
use crate::errors::{AppError, AppResult};

/// 세션 토큰 디코더
#[derive(Clone, Default)]
pub struct SessionDecoder {
    secret: Option<String>,
}

impl std::fmt::Debug for SessionDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDecoder")
            .field("verifies_signature", &self.secret.is_some())
            .finish()
    }
}

impl SessionDecoder {
    /// 새 디코더 생성
    ///
    /// # Arguments
    ///
    /// * `secret` - HS256 서명 검증용 비밀키. `None`이면 서명을 검증하지 않습니다.
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }

    /// 서명 검증 없이 디코딩하는 디코더
    pub fn unverified() -> Self {
        Self { secret: None }
    }

    /// 토큰을 디코딩하여 클레임을 추출합니다.
    ///
    /// 만료 여부는 확인하지 않습니다. 만료 확인은 [`decode_active`](Self::decode_active)를 사용하세요.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 형식 오류, 서명 불일치, 필수 클레임 누락
    pub fn decode(&self, token: &str) -> AppResult<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let key = match &self.secret {
            Some(secret) => DecodingKey::from_secret(secret.as_bytes()),
            None => {
                validation.insecure_disable_signature_validation();
                DecodingKey::from_secret(&[])
            }
        };

        decode::<SessionClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 유효하지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// 토큰을 디코딩하고 주어진 시각(Unix 초) 기준 만료 여부를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 디코딩 실패 또는 만료된 토큰
    pub fn decode_active(&self, token: &str, now: i64) -> AppResult<SessionClaims> {
        let claims = self.decode(token)?;
        if claims.is_expired_at(now) {
            return Err(AppError::AuthenticationError("토큰이 만료되었습니다".to_string()));
        }
        Ok(claims)
    }

    /// 현재 시각 기준으로 유효한 토큰인지 확인
    pub fn is_active(&self, token: &str) -> bool {
        self.decode_active(token, Utc::now().timestamp()).is_ok()
    }
}

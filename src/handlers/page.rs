//! 페이지 셸 핸들러
//!
//! 라우트 가드를 통과한 화면 요청에 대한 응답입니다. 화면 렌더링 자체는
//! 프런트엔드가 담당하므로 여기서는 경로와 세션 상태만 알려줍니다.

use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde_json::json;

use crate::domain::models::token::token::SessionClaims;

/// 가드를 통과한 모든 화면 경로
pub async fn page_shell(req: HttpRequest) -> HttpResponse {
    let claims = req.extensions().get::<SessionClaims>().cloned();

    HttpResponse::Ok().json(json!({
        "path": req.path(),
        "authenticated": claims.is_some(),
        "userId": claims.as_ref().and_then(|c| c.user_id.clone()),
        "role": claims.as_ref().and_then(|c| c.active_role.clone().or_else(|| c.role.clone())),
    }))
}

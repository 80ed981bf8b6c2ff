//! 라우트 가드 미들웨어
//!
//! 모든 페이지 요청 앞에서 세션 쿠키를 확인하여, 인증이 필요한 경로에 세션 없이
//! 접근하면 `/login?redirect=<원래 경로>`로 307 리디렉션합니다.
//! 판단 자체는 [`RoutePolicy`]가 담당하며 요청 간에 공유되는 상태는 없습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::GuardConfig;
use crate::middlewares::route_guard_inner::RouteGuardService;
use crate::services::auth::route_policy::RoutePolicy;

/// 라우트 가드 미들웨어
#[derive(Clone)]
pub struct RouteGuard {
    /// 세션 쿠키 이름
    cookie_name: Rc<str>,
    policy: Rc<RoutePolicy>,
}

impl RouteGuard {
    pub fn new(cookie_name: &str, policy: RoutePolicy) -> Self {
        Self {
            cookie_name: Rc::from(cookie_name),
            policy: Rc::new(policy),
        }
    }

    /// 가드 설정으로 미들웨어 생성
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(&config.cookie_name, RoutePolicy::from_config(config))
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&GuardConfig::default())
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RouteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RouteGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardService {
            service: Rc::new(service),
            cookie_name: self.cookie_name.clone(),
            policy: self.policy.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::token::SessionClaims;
    use crate::services::auth::session_decoder::test_tokens::session_token;
    use actix_web::cookie::Cookie;
    use actix_web::http::{header::LOCATION, StatusCode};
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};

    async fn page(req: HttpRequest) -> HttpResponse {
        let user = req
            .extensions()
            .get::<SessionClaims>()
            .and_then(|c| c.user_id.clone())
            .unwrap_or_else(|| "guest".to_string());
        HttpResponse::Ok().body(user)
    }

    fn valid_cookie() -> Cookie<'static> {
        let exp = chrono::Utc::now().timestamp() + 3600;
        Cookie::new("posko_token", session_token(exp, "any"))
    }

    #[actix_web::test]
    async fn test_protected_page_without_cookie_redirects_to_login() {
        let app = test::init_service(App::new().wrap(RouteGuard::default()).default_service(web::to(page))).await;

        let req = test::TestRequest::get().uri("/orders?tab=active").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login?redirect=/orders");
    }

    #[actix_web::test]
    async fn test_protected_page_with_valid_cookie_proceeds() {
        let app = test::init_service(App::new().wrap(RouteGuard::default()).default_service(web::to(page))).await;

        let req = test::TestRequest::get().uri("/checkout/ORD-1").cookie(valid_cookie()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "user-1");
    }

    #[actix_web::test]
    async fn test_expired_cookie_redirects() {
        let app = test::init_service(App::new().wrap(RouteGuard::default()).default_service(web::to(page))).await;
        let expired = session_token(chrono::Utc::now().timestamp() - 60, "any");

        let req = test::TestRequest::get()
            .uri("/chat/room-3")
            .cookie(Cookie::new("posko_token", expired))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login?redirect=/chat/room-3");
    }

    #[actix_web::test]
    async fn test_doubled_slash_paths_are_still_guarded() {
        let app = test::init_service(App::new().wrap(RouteGuard::default()).default_service(web::to(page))).await;

        for (uri, location) in [
            ("//orders", "/login?redirect=/orders"),
            ("/orders//x", "/login?redirect=/orders/x"),
            ("//profile", "/login?redirect=/profile"),
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{}", uri);
            assert_eq!(resp.headers().get(LOCATION).unwrap(), location);
        }
    }

    #[actix_web::test]
    async fn test_public_and_asset_paths_pass_without_cookie() {
        let app = test::init_service(App::new().wrap(RouteGuard::default()).default_service(web::to(page))).await;

        for uri in ["/", "/services/cleaning", "/_next/static/chunk.js", "/orders/invoice.pdf", "/promo"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_public_page_with_cookie_exposes_claims() {
        let app = test::init_service(App::new().wrap(RouteGuard::default()).default_service(web::to(page))).await;

        let req = test::TestRequest::get().uri("/providers").cookie(valid_cookie()).to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "user-1");
    }
}

//! RouteGuard 접근 판단을 HTTP 응답으로 옮기는 서비스
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::LOCATION;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::services::auth::route_policy::{GuardDecision, RoutePolicy};

/// 실제 가드 로직을 수행하는 서비스
pub struct RouteGuardService<S> {
    pub service: Rc<S>,
    pub cookie_name: Rc<str>,
    pub policy: Rc<RoutePolicy>,
}

impl<S, B> Service<ServiceRequest> for RouteGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy.clone();
        let cookie_name = self.cookie_name.clone();

        Box::pin(async move {
            let now = chrono::Utc::now().timestamp();
            let credential = req.cookie(&cookie_name).map(|c| c.value().to_string());

            match policy.evaluate(req.path(), credential.as_deref(), now) {
                GuardDecision::Redirect { location } => {
                    log::info!("🔒 로그인 필요: {} → {}", req.path(), location);
                    let response = HttpResponse::TemporaryRedirect()
                        .insert_header((LOCATION, location))
                        .finish();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                GuardDecision::Allow => {
                    // 세션이 있으면 하위 핸들러가 사용할 수 있도록 저장
                    if let Some(claims) = policy.authenticate(credential.as_deref(), now) {
                        req.extensions_mut().insert(claims);
                    }
                }
                GuardDecision::Bypass => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

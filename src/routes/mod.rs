//! 라우트 설정 모듈
//!
//! 엣지 서버의 엔드포인트를 등록합니다. 접근 제어는 앱 전체를 감싸는
//! [`RouteGuard`](crate::middlewares::RouteGuard)가 담당하므로 라우트별 미들웨어는 없습니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `ANY /api/proxy/{tail}` - 백엔드 리버스 프록시 (`ProxyClient` app data 필요)
//! - 그 외 - 페이지 셸
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(ProxyClient::from_env(timeout)?))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::config::ProxyConfig;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check);

    configure_proxy_routes(cfg);

    cfg.default_service(web::to(handlers::page::page_shell));
}

/// 백엔드 프록시 라우트
///
/// ```bash
/// # GET <BACKEND_URL>/banners 로 전달
/// curl http://localhost:3000/api/proxy/banners
/// ```
fn configure_proxy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(ProxyConfig::PREFIX)
            .route("/{tail:.*}", web::route().to(handlers::proxy::forward)),
    );
}

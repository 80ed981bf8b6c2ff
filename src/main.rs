//! 포스코 마켓플레이스 엣지 서버
//!
//! 화면 요청 앞단의 라우트 가드와 백엔드 API 리버스 프록시를 구동합니다.

use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use posko_edge::config::{ApiConfig, CorsConfig, GuardConfig, ProxyConfig, RateLimitConfig, ServerConfig};
use posko_edge::errors::ErrorContext;
use posko_edge::handlers::proxy::ProxyClient;
use posko_edge::middlewares::RouteGuard;
use posko_edge::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 포스코 엣지 서버 시작중...");

    let proxy = ProxyClient::from_env(Duration::from_secs(ApiConfig::request_timeout_secs()))
        .context("프록시 초기화 실패")
        .map_err(|e| {
            error!("{}", e);
            std::io::Error::other(e.to_string())
        })?;

    start_http_server(proxy).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 적용 순서(바깥쪽부터): CORS → 로깅 → 라우트 가드 → Rate Limiting
///
/// Governor는 내부 서비스의 Future가 `Unpin`이어야 하므로 라우트에 가장 가깝게 둡니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(proxy: ProxyClient) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let guard_config = GuardConfig::from_env();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Proxy: http://{}{} → {}", bind_address, ProxyConfig::PREFIX, proxy.backend_url());
    if guard_config.jwt_secret.is_none() {
        info!("🔓 JWT_SECRET 미설정: 세션 쿠키 서명은 검증하지 않습니다");
    }

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let proxy = web::Data::new(proxy);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(RouteGuard::from_config(&guard_config))
            .wrap(middleware::Logger::default())
            .wrap(configure_cors())
            .app_data(proxy.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽으며, 세션 쿠키 전달을 위해 자격 증명을 허용합니다.
fn configure_cors() -> Cors {
    let cors = CorsConfig::allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

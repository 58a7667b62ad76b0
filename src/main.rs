//! OAuth 게이트웨이 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 기동 시 환경 설정을 로드하고
//! Google OAuth 필수 설정값을 검증한 뒤, 콜백 게이트웨이 라우트를 제공합니다.

use actix_web::{middleware, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use oauth_gateway_backend::config::{GoogleOAuthConfig, ServerConfig};
use oauth_gateway_backend::routes::{configure_all_routes, configure_cors};
use oauth_gateway_backend::services::auth::GoogleAuthService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file_status = load_env_file();
    init_logging();

    info!("🚀 OAuth 게이트웨이 서비스 시작중...");
    info!("{}", env_file_status);

    // 필수 OAuth 설정 검증 - 누락 시 기동 단계에서 즉시 실패
    if let Err(missing) = GoogleOAuthConfig::validate() {
        error!("❌ 필수 환경 변수 누락: {}", missing.join(", "));
        error!("   .env 파일 또는 배포 환경의 시크릿 설정을 확인하세요");
        std::process::exit(1);
    }

    // 싱글톤 서비스 조기 초기화 - 첫 요청 시점의 지연 초기화 방지
    let _ = GoogleAuthService::instance();

    info!("✅ OAuth 설정 검증 완료");

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 OAuth callback: http://{}/auth/callback", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::worker_count())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경 변수에 따라 적절한 .env 파일을 로드합니다.
/// 로거 초기화 전에 호출되므로 결과 메시지를 반환하여
/// 초기화 후 로그로 남깁니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "prod".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => format!("프로파일 {}: .env.prod 파일 로드 됨", profile),
            Err(e) => format!("프로파일 {}: .env.prod 파일 로드 실패 ({})", profile, e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => format!("프로파일 {}: .env.dev 파일 로드 됨", profile),
            Err(e) => format!("프로파일 {}: .env.dev 파일 로드 실패 ({})", profile, e),
        },
        _ => {
            dotenv::dotenv().ok();
            format!("프로파일 {}: 기본 .env 파일 로드", profile)
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 `RUST_LOG`를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

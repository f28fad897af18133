use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use request_context_backend::config::{Environment, ServerConfig, TraceConfig};
use request_context_backend::middlewares::RequestContextMiddleware;
use request_context_backend::routes::configure_all_routes;
use request_context_backend::services::context::header_names;
use request_context_backend::services::trace::default_generator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    let environment = Environment::current();
    init_logging(environment);

    match env_file {
        Ok(name) => info!("{} 파일 로드 됨", name),
        Err(e) => warn!("환경 파일 로드 실패 (환경 변수만 사용): {}", e),
    }

    info!("🚀 요청 컨텍스트 서비스 시작중... ({:?})", environment);

    // 첫 요청 전에 프로세스 전역 ID 생성기 초기화
    default_generator();
    info!("🔖 trace id 접두사: {}", TraceConfig::prefix());

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 요청 컨텍스트 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Context API: http://{}/api/v1/context", bind_address);

    HttpServer::new(|| {
        App::new()
            // 가장 안쪽: 라우트보다 먼저, 로거/CORS보다 나중에 실행
            .wrap(RequestContextMiddleware::from_config())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드
///
/// # Returns
///
/// 로드한 파일 이름, 또는 로드 실패 에러
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev".to_string()),
        _ => dotenv().map(|path| path.display().to_string()),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # trace id 발급 로그만 debug
/// RUST_LOG=info,request_context_backend::services::trace=debug cargo run
/// ```
fn init_logging(environment: Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// CORS 설정을 구성합니다
///
/// 클라이언트가 컨텍스트 헤더를 보낼 수 있도록 허용하고,
/// 응답의 `X-Trace-Id` 헤더를 브라우저 스크립트에 노출합니다.
fn configure_cors() -> Cors {
    let context_headers = [
        header_names::TRACE_ID,
        header_names::DEVICE_ID,
        header_names::DEVICE_TYPE,
        header_names::DEVICE_VERSION,
        header_names::USER_TOKEN,
    ]
    .into_iter()
    .filter_map(|name| HeaderName::try_from(name).ok());

    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(
            [header::ACCEPT, header::ACCEPT_LANGUAGE, header::CONTENT_TYPE]
                .into_iter()
                .chain(context_headers),
        )
        .expose_headers([HeaderName::from_static(header_names::TRACE_ID_LOWER)])
        .max_age(3600)
}

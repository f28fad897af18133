use crate::handlers;
use actix_web::web;

/// 모든 라우트를 설정합니다
///
/// 요청 컨텍스트 미들웨어는 `App` 전체에 등록되므로 (`main.rs`) 여기서는 라우트만 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .wrap(RequestContextMiddleware::from_config())
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(handlers::health::health_check);

    configure_context_routes(cfg);
}

/// 요청 컨텍스트 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/context` - 현재 요청 컨텍스트 스냅샷
/// - `POST /api/v1/context/user` - 요청 범위 사용자 지정
/// - `POST /api/v1/context/attributes` - 요청 범위 속성 지정
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/v1/context -H "X-Trace-Id: abc-123"
///
/// curl -X POST http://localhost:8080/api/v1/context/user \
///   -H "Content-Type: application/json" \
///   -d '{"userId": 42, "username": "alice"}'
/// ```
fn configure_context_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/context")
            .service(handlers::context::get_context)
            .service(handlers::context::assign_user)
            .service(handlers::context::put_attributes)
    );
}

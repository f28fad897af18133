use actix_web::get;
use serde_json::{json, Value};
use crate::config::{Environment, TraceConfig};
use crate::domain::dto::ApiResult;

/// 헬스체크
///
/// `GET /health`
#[get("/health")]
pub async fn health_check() -> ApiResult<Value> {
    ApiResult::success(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": format!("{:?}", Environment::current()),
        "traceIdPrefix": TraceConfig::prefix(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

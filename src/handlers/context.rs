//! 요청 컨텍스트 API 핸들러
//!
//! 현재 요청의 컨텍스트를 조회하거나, 요청 범위 안에서 사용자와 속성을 지정한 결과를 반환합니다.
//! 컨텍스트는 요청이 끝나면 폐기되므로 지정한 값은 다음 요청에 남지 않습니다.

use actix_web::{get, post, web};
use log::{debug, info};
use serde::Deserialize;
use serde_json::{Map, Value};
use crate::core::errors::AppError;
use crate::domain::context::UserInfo;
use crate::domain::dto::{ApiResult, ContextSnapshot};
use crate::domain::ids::UserId;
use crate::domain::values::TypedValue;
use crate::middlewares::CurrentContext;

/// 사용자 지정 요청
///
/// `userId`는 숫자 또는 숫자 문자열을 받습니다 (`42`, `"42"`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserRequest {
    #[serde(default)]
    pub user_id: Value,
    pub username: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// 현재 요청 컨텍스트 조회
///
/// `GET /api/v1/context`
///
/// ```bash
/// curl http://localhost:8080/api/v1/context \
///   -H "X-Trace-Id: abc-123" \
///   -H "Accept-Language: ko-KR"
/// ```
#[get("")]
pub async fn get_context(ctx: CurrentContext) -> ApiResult<ContextSnapshot> {
    ctx.touch();
    ApiResult::success(ctx.snapshot())
}

/// 요청 범위 사용자 지정
///
/// `POST /api/v1/context/user`
///
/// # Errors
///
/// * 400 - `userId`가 없거나 숫자로 변환할 수 없는 경우
/// * 409 - 이미 사용자가 지정된 경우
#[post("/user")]
pub async fn assign_user(
    ctx: CurrentContext,
    payload: web::Json<AssignUserRequest>,
) -> Result<ApiResult<ContextSnapshot>, AppError> {
    let request = payload.into_inner();
    let user_id = UserId::require_json(&request.user_id)?;

    ctx.set_user_info(UserInfo {
        user_id,
        username: request.username,
        display_name: request.display_name,
        roles: request.roles,
    })?;
    info!("요청 사용자 지정: {} (trace={:?})", user_id, ctx.trace_id());

    Ok(ApiResult::success(ctx.snapshot()))
}

/// 요청 범위 속성 지정
///
/// `POST /api/v1/context/attributes`
///
/// 본문 JSON 객체의 각 필드를 속성으로 저장합니다. 같은 키는 마지막 값이 남습니다.
#[post("/attributes")]
pub async fn put_attributes(
    ctx: CurrentContext,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<ContextSnapshot> {
    for (key, value) in payload.into_inner() {
        debug!("속성 저장: {}", key);
        ctx.set_attribute(key, value);
    }
    ApiResult::success(ctx.snapshot())
}

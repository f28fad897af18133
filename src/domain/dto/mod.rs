//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 클라이언트로 나가는 데이터 구조를 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── api_result.rs        # 공통 응답 envelope (trace id 포함)
//! └── context_response.rs  # 요청 컨텍스트 스냅샷
//! ```
//!
//! ## 응답 envelope
//!
//! 모든 JSON 응답은 [`ApiResult`]로 감싸서 반환합니다. 핸들러가 `ApiResult`를 반환하면
//! 직렬화 직전에 [`ResponseEnricher`](crate::services::context::ResponseEnricher)가
//! 현재 요청의 trace id를 envelope에 채워 넣습니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::ApiResult;
//!
//! pub async fn ping() -> ApiResult<&'static str> {
//!     ApiResult::success("pong")
//! }
//! // → {"code":200,"message":"OK","data":"pong","traceId":"TRACE-..."}
//! ```

pub mod api_result;
pub mod context_response;

pub use api_result::*;
pub use context_response::*;

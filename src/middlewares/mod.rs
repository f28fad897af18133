//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 요청 컨텍스트를 관리하는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 요청 컨텍스트 미들웨어 (RequestContextMiddleware)
//! - 요청마다 `RequestContext` 생성 (trace id 결정, 잘 알려진 헤더 반영)
//! - `Arc<RequestContext>`를 request extension에 저장
//! - 응답에 `X-Trace-Id` 헤더 설정
//! - trace id 생성 실패 시 해당 요청만 500 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::{CurrentContext, RequestContextMiddleware};
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(RequestContextMiddleware::from_config())
//!         .service(/* 라우트들 */)
//! })
//!
//! // 핸들러에서 컨텍스트 사용
//! async fn handler(ctx: CurrentContext) -> ApiResult<String> {
//!     ctx.set_attribute("handler.visited", true);
//!     ApiResult::success(ctx.request_uri().to_string())
//! }
//! ```

pub mod request_context_middleware;
mod request_context_inner;
pub mod current_context;

pub use request_context_middleware::RequestContextMiddleware;
pub use current_context::CurrentContext;

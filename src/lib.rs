//! 요청 컨텍스트 백엔드
//!
//! 요청 하나의 수명 동안 trace id, 인증 토큰, 사용자/클라이언트 정보, 임의 속성을 운반하는
//! 요청 범위 컨텍스트와, null 안전한 타입 식별자(`UserId`, `TraceId`, `Token`)를 제공하는
//! actix-web 서비스입니다.
//!
//! # Features
//!
//! - **타입 식별자**: null 안전 생성, 문자열/JSON 변환, 값 동등성, 투명 직렬화
//! - **요청 컨텍스트**: 한 번만 설정 가능한 trace id/사용자, 동시 접근 가능한 헤더/속성 맵
//! - **trace id 발급**: 인바운드 `X-Trace-Id` 재사용 또는 Snowflake/UUID 생성
//! - **응답 보강**: 응답 envelope과 `X-Trace-Id` 헤더에 trace id 복사
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │ RequestContextMiddleware │ ← 요청마다 컨텍스트 생성, X-Trace-Id 응답 헤더
//! └──────────────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────┐
//! │    Routes / Handlers     │ ← CurrentContext 추출자로 컨텍스트 사용
//! └──────────────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────┐
//! │        Services          │ ← ContextFactory, TraceIdProvider, ResponseEnricher
//! └──────────────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────┐
//! │         Domain           │ ← TypedValue, 식별자, RequestContext, ApiResult
//! └──────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use request_context_backend::services::context::{ContextFactory, ResponseEnricher};
//! use request_context_backend::domain::dto::ApiResult;
//!
//! let headers = HashMap::from([("X-Trace-Id".to_string(), "abc-123".to_string())]);
//! let ctx = ContextFactory::from_config().build(&headers, "/orders", None)?;
//!
//! ctx.set_attribute("order.count", 3_u32);
//! let envelope = ResponseEnricher::before_envelope_sent(ApiResult::success("ok"), &ctx);
//! assert_eq!(envelope.trace_id(), ctx.trace_id());
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

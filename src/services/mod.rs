//! 요청 컨텍스트 파이프라인을 담당하는 서비스 계층 모듈
//!
//! # Modules
//!
//! - [`trace`] - trace id 발급 (ID 생성기, TraceIdProvider)
//! - [`context`] - 컨텍스트 생성 (ContextFactory), 응답 보강 (ResponseEnricher)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::context::{ContextFactory, ResponseEnricher};
//!
//! let ctx = ContextFactory::from_config().build(req.headers(), "/api/v1/context", None)?;
//! let envelope = ResponseEnricher::before_envelope_sent(ApiResult::success(data), &ctx);
//! ```

pub mod trace;
pub mod context;

//! 요청 컨텍스트 서비스
//!
//! - [`context_factory`] - 인바운드 헤더로 `RequestContext` 생성
//! - [`response_enricher`] - 응답 직전 trace id 복사

pub mod context_factory;
pub mod response_enricher;

pub use context_factory::{header_names, ContextFactory, HeaderSource};
pub use response_enricher::{ResponseEnricher, TraceCarrier};

//! # Response Enricher
//!
//! 응답이 나가기 직전에 요청 컨텍스트의 trace id를 응답 envelope에 복사합니다.
//!
//! 응답 보강은 관측 편의 기능이므로 실패해도 응답 자체는 유효합니다.
//! [`TraceCarrier::apply_trace_id`] 는 실패를 `Result`로 명시적으로 반환하고,
//! [`ResponseEnricher::before_envelope_sent`] 가 호출 지점에서 이를 잡아 경고 로그로 남깁니다.

use actix_web::HttpResponse;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, HeaderValue};
use log::{debug, warn};
use serde_json::Value;
use crate::core::errors::{AppError, AppResult};
use crate::domain::context::RequestContext;
use crate::domain::dto::ApiResult;
use crate::domain::ids::TraceId;
use crate::domain::values::{json_kind, StringTypedValue};
use crate::services::context::context_factory::header_names;

/// trace id를 담을 수 있는 응답 envelope
pub trait TraceCarrier {
    /// trace id를 envelope에 설정합니다. 실패한 경우 envelope는 변경되지 않아야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::EnrichmentFailure` - envelope에 trace id를 넣을 수 없는 경우
    fn apply_trace_id(&mut self, trace_id: &TraceId) -> AppResult<()>;
}

impl<T> TraceCarrier for ApiResult<T> {
    fn apply_trace_id(&mut self, trace_id: &TraceId) -> AppResult<()> {
        self.set_trace_id(trace_id.clone());
        Ok(())
    }
}

/// JSON 객체 응답에는 `traceId` 필드를 추가합니다.
impl TraceCarrier for Value {
    fn apply_trace_id(&mut self, trace_id: &TraceId) -> AppResult<()> {
        let kind = json_kind(self);
        match self.as_object_mut() {
            Some(map) => {
                map.insert("traceId".to_string(), Value::String(trace_id.as_str().to_string()));
                Ok(())
            }
            None => Err(AppError::EnrichmentFailure(format!(
                "JSON {} 응답에는 traceId를 추가할 수 없습니다",
                kind
            ))),
        }
    }
}

/// HTTP 응답에는 `X-Trace-Id` 헤더를 설정합니다.
impl<B> TraceCarrier for HttpResponse<B> {
    fn apply_trace_id(&mut self, trace_id: &TraceId) -> AppResult<()> {
        let value = HeaderValue::from_str(trace_id.as_str()).map_err(|e| {
            AppError::EnrichmentFailure(format!("헤더에 사용할 수 없는 trace id: {}", e))
        })?;
        self.headers_mut()
            .insert(HeaderName::from_static(header_names::TRACE_ID_LOWER), value);
        Ok(())
    }
}

impl<B> TraceCarrier for ServiceResponse<B> {
    fn apply_trace_id(&mut self, trace_id: &TraceId) -> AppResult<()> {
        self.response_mut().apply_trace_id(trace_id)
    }
}

/// 응답 보강 단계
pub struct ResponseEnricher;

impl ResponseEnricher {
    /// 컨텍스트의 trace id를 envelope에 복사하고 envelope를 반환합니다.
    ///
    /// 이 메서드는 실패하지 않습니다.
    /// - 컨텍스트에 trace id가 없으면 envelope를 그대로 반환하고 debug 로그를 남깁니다.
    /// - 복사에 실패하면 warn 로그를 남기고 envelope를 그대로 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let envelope = ResponseEnricher::before_envelope_sent(ApiResult::success(data), &ctx);
    /// assert_eq!(envelope.trace_id(), ctx.trace_id());
    /// ```
    pub fn before_envelope_sent<E: TraceCarrier>(mut envelope: E, context: &RequestContext) -> E {
        let Some(trace_id) = context.trace_id() else {
            debug!("trace id 없는 컨텍스트, 응답 보강 생략: {}", context.request_uri());
            return envelope;
        };

        if let Err(e) = envelope.apply_trace_id(trace_id) {
            warn!("응답 trace id 보강 실패 (무시): {}", e);
        }
        envelope
    }
}

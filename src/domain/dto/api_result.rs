use std::sync::Arc;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::domain::context::RequestContext;
use crate::domain::ids::TraceId;
use crate::services::context::ResponseEnricher;

/// 공통 응답 envelope
///
/// `trace_id`는 핸들러가 직접 채우지 않습니다. [`Responder`] 구현이 직렬화 직전에
/// [`ResponseEnricher::before_envelope_sent`] 를 호출하여 요청 컨텍스트의 trace id를 복사합니다.
///
/// ```json
/// {
///   "code": 200,
///   "message": "OK",
///   "data": { ... },
///   "traceId": "TRACE-7212398123456512"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    /// HTTP 상태 코드와 동일한 결과 코드
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<TraceId>,
}

impl<T> ApiResult<T> {
    /// 성공 응답 (200 OK)
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "OK".to_string(),
            data: Some(data),
            trace_id: None,
        }
    }

    /// 데이터 없는 성공 응답
    pub fn empty() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "OK".to_string(),
            data: None,
            trace_id: None,
        }
    }

    /// 실패 응답
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: None,
            trace_id: None,
        }
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn set_trace_id(&mut self, trace_id: TraceId) {
        self.trace_id = Some(trace_id);
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK)
    }
}

impl<T: Serialize> Responder for ApiResult<T> {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let context = req.extensions().get::<Arc<RequestContext>>().cloned();

        let envelope = match context {
            Some(ctx) => ResponseEnricher::before_envelope_sent(self, &ctx),
            None => {
                debug!("요청 컨텍스트 없음, trace id 없이 응답: {}", req.path());
                self
            }
        };

        HttpResponse::build(envelope.status()).json(envelope)
    }
}

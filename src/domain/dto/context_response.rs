use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::context::{ClientInfo, UserInfo};
use crate::domain::enums::Language;
use crate::domain::ids::{TraceId, UserId};

/// 요청 컨텍스트 스냅샷 응답 DTO
///
/// [`RequestContext::snapshot`](crate::domain::context::RequestContext::snapshot) 으로 생성합니다.
/// 인증 토큰 원문은 포함하지 않으며 토큰 존재 여부만 `authenticated`로 노출합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    pub trace_id: Option<TraceId>,
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,

    /// 요청에 인증 토큰이 포함되었는지 여부
    pub authenticated: bool,

    pub language: Language,
    pub request_uri: String,
    pub request_time: DateTime<Utc>,
    pub client_info: ClientInfo,
    pub header_count: usize,

    /// 현재 설정된 속성 키 (정렬됨, 값은 노출하지 않음)
    pub attribute_keys: Vec<String>,
}
